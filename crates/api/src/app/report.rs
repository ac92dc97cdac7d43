//! Presentation layer: maps a validated analysis onto the four report views
//! (summary, people, scores, raw JSON) and renders them as HTML.

use serde::Serialize;

use truthlens_ai::{Analysis, Person};
use truthlens_core::{MediaType, Score};

use crate::app::errors::Failure;

/// Binary authenticity verdict, keyed on `is_fake`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Fake,
    Real,
}

impl Verdict {
    pub fn from_is_fake(is_fake: bool) -> Self {
        if is_fake { Verdict::Fake } else { Verdict::Real }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::Fake => "FAKE / Manipulated / AI-Generated",
            Verdict::Real => "REAL IMAGE",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            Verdict::Fake => "verdict fake",
            Verdict::Real => "verdict real",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub verdict: Verdict,
    pub headline: &'static str,
    pub image_type: &'static str,
    pub truth_score: u8,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonCard {
    pub name: String,
    pub is_public_figure: bool,
    pub confidence: u8,
    pub description: String,
}

impl From<&Person> for PersonCard {
    fn from(p: &Person) -> Self {
        Self {
            name: p.name.clone(),
            is_public_figure: p.is_public_figure,
            confidence: p.confidence.value(),
            description: p.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "people", rename_all = "snake_case")]
pub enum PeopleSection {
    NoneDetected,
    Detected(Vec<PersonCard>),
}

impl PeopleSection {
    pub const NONE_DETECTED_MESSAGE: &'static str = "No recognizable people detected.";
}

/// One proportional progress indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBar {
    pub label: &'static str,
    pub value: u8,
    /// `value / 100`, always within 0.0..=1.0.
    pub fraction: f64,
}

impl ScoreBar {
    fn new(label: &'static str, score: Score) -> Self {
        Self {
            label,
            value: score.value(),
            fraction: score.fraction(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub summary: SummaryView,
    pub people: PeopleSection,
    pub scores: Vec<ScoreBar>,
    /// Pretty-printed parsed model output.
    pub raw_json: String,
}

impl ReportView {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let r = &analysis.result;

        let people = if r.people_detected.is_empty() {
            PeopleSection::NoneDetected
        } else {
            PeopleSection::Detected(r.people_detected.iter().map(PersonCard::from).collect())
        };

        let verdict = Verdict::from_is_fake(r.is_fake);

        Self {
            summary: SummaryView {
                verdict,
                headline: verdict.headline(),
                image_type: r.image_type.as_str(),
                truth_score: r.truth_score.value(),
                reasoning: r.reasoning.clone(),
            },
            people,
            scores: vec![
                ScoreBar::new("AI Artifact Score", r.ai_artifact_score),
                ScoreBar::new("Manipulation Score", r.manipulation_score),
                ScoreBar::new("Realism Score", r.realism_score),
                ScoreBar::new("Truth Score", r.truth_score),
            ],
            raw_json: serde_json::to_string_pretty(&analysis.parsed)
                .unwrap_or_else(|_| analysis.raw_response.clone()),
        }
    }
}

// -------------------------
// HTML rendering
// -------------------------

const TITLE: &str = "Fake Image + Public Figure Identification";

const STYLE: &str = "body{font-family:sans-serif;max-width:56rem;margin:2rem auto;padding:0 1rem}\
.verdict{padding:.75rem 1rem;border-radius:.4rem;font-weight:bold}\
.fake{background:#fde2e1;color:#8a1c13}.real{background:#dcf5e3;color:#17603a}\
.warn{background:#fff4d6;padding:.75rem 1rem;border-radius:.4rem}\
.person{border-top:1px solid #ddd;padding:.5rem 0}\
progress{width:100%}pre{background:#f5f5f5;padding:1rem;overflow:auto}";

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{TITLE}</h1>\n{body}\n</body>\n</html>\n"
    )
}

/// The upload form.
pub fn index_html() -> String {
    let accept = MediaType::ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");

    page(&format!(
        "<p>AI-powered detection of fake images, deepfakes, and recognition of public figures.</p>\n\
         <form action=\"/report\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"image\" accept=\"{accept}\" required>\n\
         <button type=\"submit\">Analyze</button>\n</form>\n\
         <p class=\"warn\">Upload an image to begin.</p>"
    ))
}

pub fn render_report_html(view: &ReportView) -> String {
    let s = &view.summary;
    let mut body = String::new();

    body.push_str("<h2>Summary</h2>\n");
    body.push_str(&format!(
        "<p class=\"{}\">{}</p>\n",
        s.verdict.css_class(),
        escape_html(s.headline)
    ));
    body.push_str(&format!(
        "<p><strong>Image Type:</strong> <code>{}</code></p>\n",
        escape_html(s.image_type)
    ));
    body.push_str(&format!(
        "<p><strong>Truth Score:</strong> {} / 100</p>\n",
        s.truth_score
    ));
    body.push_str(&format!(
        "<h3>Explanation</h3>\n<p>{}</p>\n",
        escape_html(&s.reasoning)
    ));

    body.push_str("<h2>People Detected</h2>\n");
    match &view.people {
        PeopleSection::NoneDetected => body.push_str(&format!(
            "<p class=\"warn\">{}</p>\n",
            PeopleSection::NONE_DETECTED_MESSAGE
        )),
        PeopleSection::Detected(cards) => {
            for p in cards {
                body.push_str(&format!(
                    "<div class=\"person\">\n<h3>{}</h3>\n\
                     <p><strong>Public Figure:</strong> {}</p>\n\
                     <p><strong>Confidence:</strong> {}%</p>\n\
                     <p><strong>About:</strong> {}</p>\n</div>\n",
                    escape_html(&p.name),
                    if p.is_public_figure { "Yes" } else { "No" },
                    p.confidence,
                    escape_html(&p.description)
                ));
            }
        }
    }

    body.push_str("<h2>Scores</h2>\n");
    for bar in &view.scores {
        body.push_str(&format!(
            "<p><strong>{}</strong> ({})</p>\n<progress value=\"{:.2}\" max=\"1\">{}%</progress>\n",
            bar.label, bar.value, bar.fraction, bar.value
        ));
    }

    body.push_str(&format!(
        "<h2>Raw JSON</h2>\n<pre><code>{}</code></pre>\n",
        escape_html(&view.raw_json)
    ));
    body.push_str("<p><a href=\"/\">Analyze another image</a></p>");

    page(&body)
}

/// Error page; shows the model's raw output when there is one.
pub fn render_failure_html(failure: &Failure) -> String {
    let mut body = format!(
        "<p class=\"verdict fake\">Analysis failed: {}</p>\n",
        escape_html(&failure.message)
    );
    if let Some(raw) = &failure.raw_response {
        body.push_str(&format!(
            "<h2>Failed to parse output. Raw response:</h2>\n<pre><code>{}</code></pre>\n",
            escape_html(raw)
        ));
    }
    body.push_str("<p><a href=\"/\">Try another image</a></p>");
    page(&body)
}
