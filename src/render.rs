//! HTML rendering for the analysis page

use std::fmt::Write;

use crate::constants::{APP_NAME, EEG_SAMPLE_COUNT};
use crate::input::{EegSample, InputError};
use crate::model::PredictionResult;

/// What the page shows below the form
#[derive(Debug)]
pub enum Outcome<'a> {
    Idle,
    Rejected(&'a InputError),
    /// The form itself could not be read (too large, truncated)
    Unreadable(&'a str),
    Scored {
        sample: &'a EegSample,
        result: &'a PredictionResult,
    },
}

const STYLE: &str = r#"
body { margin: 0; font-family: sans-serif; color: #ffffff;
       background: linear-gradient(135deg, #0a1f3f 0%, #1a3a52 100%); min-height: 100vh; }
main { max-width: 860px; margin: 0 auto; padding: 2rem; }
h1, .subtitle, .hint { text-align: center; }
.subtitle { color: #1dd1a1; }
.hint, .footer { color: #b0bec5; }
.about { margin: 1.5rem 0; padding: 1rem 1.2rem; border-radius: 12px; background: rgba(29, 209, 161, 0.08); }
.about h3 { margin-top: 0; color: #1dd1a1; }
.tagline { color: #90a4ae; }
form { display: grid; gap: 1rem; }
textarea { width: 100%; min-height: 6rem; }
.error { padding: 0.8rem 1rem; border-radius: 8px; background: rgba(244, 67, 54, 0.2); }
.echo { overflow-x: auto; font-family: monospace; font-size: 0.8em; color: #b0bec5; }
.card { margin-top: 2rem; padding: 1.5rem 1.8rem; border-radius: 18px;
        background: rgba(255, 255, 255, 0.04); border: 1px solid rgba(255, 255, 255, 0.12); }
.verdict { padding: 1.2rem 1.4rem; border-radius: 14px; background: rgba(15, 25, 45, 0.85); }
.bar { height: 9px; border-radius: 999px; background: rgba(255, 255, 255, 0.06); overflow: hidden; }
.bar > div { height: 100%; }
.footer { margin-top: 3rem; text-align: center; font-size: 0.85em; }
"#;

/// Render the whole page for one request
pub fn page(outcome: &Outcome<'_>, text: &str) -> String {
    let mut html = String::with_capacity(8 * 1024);

    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Seizure Detection</title>\
         <style>{STYLE}</style></head><body><main>\
         <h1>{APP_NAME}</h1>\
         <p class=\"subtitle\">Advanced EEG Analysis System</p>\
         <p class=\"hint\">Upload EEG ({EEG_SAMPLE_COUNT} values) for automated seizure detection</p>\
         <section class=\"about\"><h3>About This Tool</h3>\
         <p>An AI-powered system that analyzes EEG time-series data ({EEG_SAMPLE_COUNT} data points) \
         to detect epileptic seizure events, assisting in automated neurological screening.</p></section>"
    );

    let _ = write!(
        html,
        "<form method=\"post\" action=\"/analyze\" enctype=\"multipart/form-data\">\
         <label>Upload EEG CSV ({EEG_SAMPLE_COUNT} values) <input type=\"file\" name=\"eeg_file\" accept=\".csv\"></label>\
         <label>Or paste {EEG_SAMPLE_COUNT} comma-separated values\
         <textarea name=\"eeg_text\" placeholder=\"0.5, 1.2, -0.3, ...\">{}</textarea></label>\
         <button type=\"submit\">Analyze</button></form>",
        escape(text)
    );

    match outcome {
        Outcome::Idle => {}
        Outcome::Rejected(err) => {
            let _ = write!(html, "<p class=\"error\">{}</p>", escape(&err.to_string()));
        }
        Outcome::Unreadable(reason) => {
            let _ = write!(
                html,
                "<p class=\"error\">Could not read the submitted form: {}</p>",
                escape(reason)
            );
        }
        Outcome::Scored { sample, result } => {
            html.push_str(&echo(sample));
            html.push_str(&result_card(result));
        }
    }

    let _ = write!(
        html,
        "<div class=\"footer\"><p>Results are for research and educational purposes only \
         and must not be used as a substitute for professional medical diagnosis.</p>\
         <p class=\"tagline\">{APP_NAME} | Powered by Advanced Neural Networks</p></div>\
         </main></body></html>"
    );

    html
}

/// Raw values back to the user, unchanged
fn echo(sample: &EegSample) -> String {
    let values = sample
        .as_slice()
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!("<p>EEG Loaded:</p><pre class=\"echo\">[{}]</pre>", values)
}

fn result_card(result: &PredictionResult) -> String {
    let tone = result.label.tone();

    format!(
        "<div class=\"card\"><h2>Analysis Results</h2>\
         <div class=\"verdict\" style=\"border: 1px solid {border}\">\
         <p style=\"color: {title}; font-weight: 700\">{headline}</p><p>{description}</p></div>\
         <h3>Confidence Scores</h3>{seizure}{normal}</div>",
        border = tone.border_color,
        title = tone.title_color,
        headline = result.label.headline(),
        description = result.label.description(),
        seizure = metric_bar("Seizure Activity", result.seizure_confidence_pct, "#ff6b81"),
        normal = metric_bar("Normal EEG", result.normal_confidence_pct, "#00d2d3"),
    )
}

fn metric_bar(title: &str, value: f64, color: &str) -> String {
    format!(
        "<div class=\"metric\"><p><span>{title}</span> <span>{value:.2}%</span></p>\
         <div class=\"bar\"><div style=\"width: {value:.2}%; background: {color}\"></div></div></div>"
    )
}

/// Minimal HTML escaping for text and attribute content
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>'a' & \"b\"</b>"), "&lt;b&gt;&#39;a&#39; &amp; &quot;b&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_idle_page_has_form_only() {
        let html = page(&Outcome::Idle, "");
        assert!(html.contains("name=\"eeg_file\""));
        assert!(html.contains("name=\"eeg_text\""));
        assert!(!html.contains("Analysis Results"));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_page_carries_about_and_tagline() {
        let html = page(&Outcome::Idle, "");
        assert!(html.contains("About This Tool"));
        assert!(html.contains("analyzes EEG time-series data (178 data points)"));
        assert!(html.contains("Seizure Detection AI | Powered by Advanced Neural Networks"));
        assert!(html.contains("professional medical diagnosis"));
    }

    #[test]
    fn test_unreadable_form_shows_banner() {
        let html = page(&Outcome::Unreadable("length limit <exceeded>"), "");
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("Could not read the submitted form: length limit &lt;exceeded&gt;"));
        assert!(html.contains("name=\"eeg_text\""));
    }

    #[test]
    fn test_rejected_page_escapes_token() {
        let err = InputError::Parse { token: "<script>".to_string() };
        let html = page(&Outcome::Rejected(&err), "<script>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_scored_page() {
        let sample = EegSample::new(vec![0.5; EEG_SAMPLE_COUNT]).unwrap();
        let result = PredictionResult::from_probability(0.82, 10);
        let html = page(&Outcome::Scored { sample: &sample, result: &result }, "");

        assert!(html.contains("SEIZURE DETECTED"));
        assert!(html.contains("82.00%"));
        assert!(html.contains("18.00%"));
        assert!(html.contains("EEG Loaded:"));
        assert!(html.contains("#ff6b6b"));
    }
}
