//! Calculator page and evaluation API.
//!
//! The page owns all interactive state (slider ranges and defaults);
//! the model is reached only through the plain records of
//! nanoperm-model.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};

use nanoperm_model::{evaluate, size_window_curve, RawInputs, WeightVector};

use crate::error::ApiError;
use crate::state::SharedState;

/// Query parameters for one evaluation. Every field is optional and
/// falls back to the model's default inputs/weights.
#[derive(Debug, Default, Deserialize)]
pub struct EvaluateParams {
    pub size_nm: Option<f64>,
    pub apoe3_affinity: Option<f64>,
    pub log_p: Option<f64>,
    pub zeta_mv: Option<f64>,
    pub dose_relative: Option<f64>,
    pub apoe3_expression: Option<f64>,
    pub bbb_tightness: Option<f64>,
    pub inflammation: Option<f64>,

    pub w_size: Option<f64>,
    pub w_affinity: Option<f64>,
    pub w_lipophilicity: Option<f64>,
    pub w_charge: Option<f64>,
    pub w_tightness: Option<f64>,
    pub w_inflammation: Option<f64>,
    pub w_dose: Option<f64>,
    pub w_expression: Option<f64>,
    pub offset: Option<f64>,
}

impl EvaluateParams {
    fn into_records(self) -> (RawInputs, WeightVector) {
        let di = RawInputs::default();
        let dw = WeightVector::default();
        let inputs = RawInputs {
            size_nm: self.size_nm.unwrap_or(di.size_nm),
            apoe3_affinity: self.apoe3_affinity.unwrap_or(di.apoe3_affinity),
            log_p: self.log_p.unwrap_or(di.log_p),
            zeta_mv: self.zeta_mv.unwrap_or(di.zeta_mv),
            dose_relative: self.dose_relative.unwrap_or(di.dose_relative),
            apoe3_expression: self.apoe3_expression.unwrap_or(di.apoe3_expression),
            bbb_tightness: self.bbb_tightness.unwrap_or(di.bbb_tightness),
            inflammation: self.inflammation.unwrap_or(di.inflammation),
        };
        let weights = WeightVector {
            w_size: self.w_size.unwrap_or(dw.w_size),
            w_affinity: self.w_affinity.unwrap_or(dw.w_affinity),
            w_lipophilicity: self.w_lipophilicity.unwrap_or(dw.w_lipophilicity),
            w_charge: self.w_charge.unwrap_or(dw.w_charge),
            w_tightness: self.w_tightness.unwrap_or(dw.w_tightness),
            w_inflammation: self.w_inflammation.unwrap_or(dw.w_inflammation),
            w_dose: self.w_dose.unwrap_or(dw.w_dose),
            w_expression: self.w_expression.unwrap_or(dw.w_expression),
            offset: self.offset.unwrap_or(dw.offset),
        };
        (inputs, weights)
    }
}

/// GET /api/evaluate — Run the full scoring pipeline once.
pub async fn api_evaluate(
    State(state): State<SharedState>,
    Query(params): Query<EvaluateParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (inputs, weights) = params.into_records();
    weights.validate()?;
    let evaluation = evaluate(&inputs, &weights, &state.calibration);
    Ok(Json(evaluation))
}

#[derive(Debug, Default, Deserialize)]
pub struct CurveParams {
    pub min_nm: Option<f64>,
    pub max_nm: Option<f64>,
    pub samples: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CurvePoint {
    pub size_nm: f64,
    pub score: f64,
}

/// Upper bound on curve resolution; the chart never needs more.
const MAX_CURVE_SAMPLES: usize = 2000;

/// GET /api/size-curve — Sampled size-window curve for the chart.
pub async fn api_size_curve(
    State(state): State<SharedState>,
    Query(params): Query<CurveParams>,
) -> Result<impl IntoResponse, ApiError> {
    let min_nm = params.min_nm.unwrap_or(1.0);
    let max_nm = params.max_nm.unwrap_or(500.0);
    let samples = params.samples.unwrap_or(200).min(MAX_CURVE_SAMPLES);

    if !(min_nm.is_finite() && max_nm.is_finite()) || min_nm > max_nm {
        return Err(ApiError::BadRequest(format!(
            "invalid size range: {}..{}",
            min_nm, max_nm
        )));
    }

    let points: Vec<CurvePoint> = size_window_curve(&state.calibration, min_nm, max_nm, samples)
        .map(|(size_nm, score)| CurvePoint { size_nm, score })
        .collect();
    Ok(Json(points))
}

/// GET / — Interactive calculator page.
pub async fn calculator_page(State(_state): State<SharedState>) -> Html<&'static str> {
    Html(CALCULATOR_HTML)
}

const CALCULATOR_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Nano-plastic &rarr; BBB via ApoE3 &mdash; Conceptual Probability Model</title>
    <style>
        :root { --bg: #0f1420; --card: #1a2233; --border: #2c3a55; --text: #e8edf7; --muted: #8fa0bd; --accent: #5b9bff; --good: #3ecf8e; --warn: #f2b84b; }
        * { box-sizing: border-box; }
        body { margin: 0; font-family: system-ui, sans-serif; background: var(--bg); color: var(--text); }
        main { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; }
        h1 { font-size: 1.4rem; }
        .disclaimer { color: var(--warn); font-size: 0.85rem; }
        .layout { display: grid; grid-template-columns: 340px 1fr; gap: 1.5rem; margin-top: 1.5rem; }
        .card { background: var(--card); border: 1px solid var(--border); border-radius: 8px; padding: 1rem 1.25rem; }
        .card h2 { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 1px; color: var(--muted); margin: 0.5rem 0; }
        label { display: flex; justify-content: space-between; font-size: 0.8rem; color: var(--muted); margin-top: 0.6rem; }
        label output { color: var(--text); }
        input[type=range] { width: 100%; accent-color: var(--accent); }
        .metric { font-size: 2.6rem; color: var(--good); }
        table { width: 100%; border-collapse: collapse; font-size: 0.85rem; margin-top: 0.5rem; }
        td { padding: 0.3rem 0; border-bottom: 1px solid var(--border); }
        td:last-child { text-align: right; }
        .bar { height: 8px; background: var(--bg); border-radius: 4px; overflow: hidden; margin-top: 2px; }
        .bar > div { height: 100%; background: var(--accent); }
        svg { width: 100%; height: auto; background: var(--bg); border-radius: 6px; margin-top: 0.5rem; }
    </style>
</head>
<body>
<main>
    <h1>Nano-plastic &rarr; Blood&ndash;Brain Barrier via ApoE3</h1>
    <p class="disclaimer">Conceptual / educational calculator. All equations and parameters are
    heuristic, for exploration only &mdash; not a toxicology or clinical risk model.</p>

    <div class="layout">
        <div class="card" id="controls">
            <h2>Nano-plastic properties</h2>
            <label>Hydrodynamic diameter (nm) <output id="o_size_nm">80</output></label>
            <input type="range" id="size_nm" min="1" max="500" step="1" value="80">
            <label>ApoE3 binding affinity (0&ndash;1) <output id="o_apoe3_affinity">0.6</output></label>
            <input type="range" id="apoe3_affinity" min="0" max="1" step="0.01" value="0.6">
            <label>Effective logP <output id="o_log_p">2.5</output></label>
            <input type="range" id="log_p" min="-2" max="6" step="0.1" value="2.5">
            <label>Zeta potential (mV) <output id="o_zeta_mv">-5</output></label>
            <input type="range" id="zeta_mv" min="-40" max="40" step="1" value="-5">

            <h2>Biological / exposure context</h2>
            <label>Relative dose (0&ndash;10) <output id="o_dose_relative">3</output></label>
            <input type="range" id="dose_relative" min="0" max="10" step="0.1" value="3">
            <label>ApoE3 carrier expression (0&ndash;1) <output id="o_apoe3_expression">0.7</output></label>
            <input type="range" id="apoe3_expression" min="0" max="1" step="0.01" value="0.7">
            <label>BBB tightness / integrity (0&ndash;1) <output id="o_bbb_tightness">0.9</output></label>
            <input type="range" id="bbb_tightness" min="0" max="1" step="0.01" value="0.9">
            <label>Neurovascular inflammation (0&ndash;1) <output id="o_inflammation">0.2</output></label>
            <input type="range" id="inflammation" min="0" max="1" step="0.01" value="0.2">

            <h2>Model tuning (advanced)</h2>
            <label>Weight: size window <output id="o_w_size">2</output></label>
            <input type="range" id="w_size" min="-4" max="4" step="0.1" value="2">
            <label>Weight: ApoE3 affinity <output id="o_w_affinity">2.5</output></label>
            <input type="range" id="w_affinity" min="-4" max="4" step="0.1" value="2.5">
            <label>Weight: lipophilicity <output id="o_w_lipophilicity">1</output></label>
            <input type="range" id="w_lipophilicity" min="-4" max="4" step="0.1" value="1">
            <label>Weight: charge <output id="o_w_charge">1</output></label>
            <input type="range" id="w_charge" min="-4" max="4" step="0.1" value="1">
            <label>Weight: BBB integrity <output id="o_w_tightness">-2</output></label>
            <input type="range" id="w_tightness" min="-4" max="4" step="0.1" value="-2">
            <label>Weight: inflammation <output id="o_w_inflammation">0.5</output></label>
            <input type="range" id="w_inflammation" min="-4" max="4" step="0.1" value="0.5">
            <label>Weight: dose <output id="o_w_dose">1.5</output></label>
            <input type="range" id="w_dose" min="-4" max="4" step="0.1" value="1.5">
            <label>Weight: ApoE3 expression <output id="o_w_expression">2</output></label>
            <input type="range" id="w_expression" min="-4" max="4" step="0.1" value="2">
        </div>

        <div>
            <div class="card">
                <h2>Estimated BBB crossing probability (relative)</h2>
                <div class="metric" id="probability">&ndash;</div>
                <h2>Factor contributions (0&ndash;1 scale)</h2>
                <table id="breakdown"></table>
            </div>
            <div class="card" style="margin-top:1.5rem">
                <h2>Sensitivity to particle size</h2>
                <svg id="chart" viewBox="0 0 600 260" preserveAspectRatio="none"></svg>
            </div>
        </div>
    </div>
</main>
<script>
const FACTORS = [
    ['size', 'Size window'],
    ['affinity', 'ApoE3 binding affinity'],
    ['lipophilicity', 'Lipophilicity'],
    ['charge', 'Charge suitability'],
    ['tightness', 'BBB tightness'],
    ['inflammation', 'Inflammation'],
    ['dose', 'Dose (relative)'],
    ['expression', 'ApoE3 expression'],
];
const SLIDERS = Array.from(document.querySelectorAll('input[type=range]'));
const CURVE_MIN = 1, CURVE_MAX = 500;
let curvePoints = [];

function queryString() {
    const params = new URLSearchParams();
    for (const s of SLIDERS) params.set(s.id, s.value);
    return params.toString();
}

async function refresh() {
    for (const s of SLIDERS) document.getElementById('o_' + s.id).textContent = s.value;
    try {
        const resp = await fetch('/api/evaluate?' + queryString());
        const result = await resp.json();
        document.getElementById('probability').textContent = (result.probability * 100).toFixed(1) + ' %';
        let html = '';
        for (const [key, name] of FACTORS) {
            const v = result.scores[key];
            html += `<tr><td>${name}<div class="bar"><div style="width:${(v * 100).toFixed(0)}%"></div></div></td>` +
                    `<td>${v.toFixed(3)}</td></tr>`;
        }
        document.getElementById('breakdown').innerHTML = html;
    } catch (e) {
        document.getElementById('probability').textContent = 'error';
    }
    drawChart();
}

function drawChart() {
    const svg = document.getElementById('chart');
    if (curvePoints.length === 0) return;
    const W = 600, H = 260, PAD = 10;
    const x = s => PAD + (s - CURVE_MIN) / (CURVE_MAX - CURVE_MIN) * (W - 2 * PAD);
    const y = v => H - PAD - v * (H - 2 * PAD);
    const path = curvePoints.map(p => `${x(p.size_nm).toFixed(1)},${y(p.score).toFixed(1)}`).join(' ');
    const sizeNow = parseFloat(document.getElementById('size_nm').value);
    svg.innerHTML =
        `<polyline points="${path}" fill="none" stroke="#5b9bff" stroke-width="2"/>` +
        `<line x1="${x(sizeNow)}" y1="${PAD}" x2="${x(sizeNow)}" y2="${H - PAD}" stroke="#f2b84b" stroke-dasharray="4 3"/>` +
        `<text x="${x(sizeNow) + 4}" y="${H - PAD - 6}" fill="#f2b84b" font-size="11">${sizeNow.toFixed(0)} nm</text>`;
}

async function loadCurve() {
    const resp = await fetch(`/api/size-curve?min_nm=${CURVE_MIN}&max_nm=${CURVE_MAX}&samples=200`);
    curvePoints = await resp.json();
    drawChart();
}

for (const s of SLIDERS) s.addEventListener('input', refresh);
loadCurve().then(refresh);
</script>
</body>
</html>"##;
