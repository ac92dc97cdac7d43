//! The fixed instruction contract sent with every analysis.
//!
//! The prompt is the schema: `AnalysisResult` in `result.rs` mirrors the JSON
//! skeleton at the bottom of `ANALYSIS_PROMPT`. Bump `ANALYSIS_PROMPT_VERSION`
//! whenever either side changes.

/// Revision of the prompt/schema contract.
pub const ANALYSIS_PROMPT_VERSION: &str = "2025.1";

/// User-turn text sent alongside the image.
pub const ANALYSIS_DIRECTIVE: &str = "Analyze this image.";

/// System instruction. Identical for every request; never formatted with
/// per-image data.
pub const ANALYSIS_PROMPT: &str = r#"
You are an advanced MULTI-AGENT FAKE IMAGE + PERSON DETECTION SYSTEM.

IMPORTANT RULE:
You ARE ALLOWED to identify public figures in images.
You MUST attempt to identify celebrities, politicians, actors, business leaders, athletes, creators, etc.

Allowed examples:
Elon Musk, Narendra Modi, Barack Obama, Cristiano Ronaldo, Virat Kohli,
Taylor Swift, Bill Gates, Jeff Bezos, Mark Zuckerberg, Joe Biden,
Shah Rukh Khan, Lionel Messi, Sundar Pichai, Kamala Harris, etc.

Do NOT hallucinate identities.
If uncertain, return "unknown".

STRICT RULE:
RETURN VALID JSON ONLY.
NO markdown, NO code fences, NO commentary, NO extra text.

-----------------------------------------------------
0. FACE IDENTIFICATION AGENT (MANDATORY)
Detect each face. For each person, return:

If recognized public figure:
{
 "name": "Elon Musk",
 "confidence": 95,
 "description": "Tech entrepreneur, CEO of Tesla and SpaceX.",
 "is_public_figure": true
}

If NOT recognized:
{
 "name": "unknown",
 "confidence": 0,
 "description": "No match to any known public figure.",
 "is_public_figure": false
}

confidence is an integer from 0 to 100.

-----------------------------------------------------
1. IMAGE TYPE DETECTOR
Classify image as exactly one of:
- whatsapp_message
- people_photo
- ai_generated_art
- normal_photo
- deepfake
- photoshopped
- meme
- document_screenshot

-----------------------------------------------------
2. AI ARTIFACT DETECTION
Look for AI-generation patterns.
Return ai_artifact_score (integer 0-100, higher = more AI artifacts).

-----------------------------------------------------
3. DEEPFAKE / MANIPULATION CHECK
Look for:
- face swapping
- blending issues
- warped features
- inconsistent lighting
Return manipulation_score (integer 0-100, higher = more manipulation).

-----------------------------------------------------
4. REALISM CHECK
Return realism_score (integer 0-100, higher = more realistic).

-----------------------------------------------------
5. TRUTH SCORE
Combine all factors into truth_score (integer 0-100):
100 = very real
0 = very fake

Set is_fake to true when the image is fake, manipulated or AI-generated.

-----------------------------------------------------
FINAL JSON OUTPUT (MANDATORY):

{
"image_type": "",
"people_detected": [],
"ai_artifact_score": 0,
"manipulation_score": 0,
"realism_score": 0,
"is_fake": false,
"truth_score": 0,
"reasoning": ""
}
"#;

/// The system instruction for image analysis.
pub fn analysis_prompt() -> &'static str {
    ANALYSIS_PROMPT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ImageType;

    #[test]
    fn lists_every_image_type() {
        for ty in ImageType::ALL {
            assert!(
                analysis_prompt().contains(&format!("- {}", ty.as_str())),
                "prompt is missing image type {}",
                ty.as_str()
            );
        }
    }

    #[test]
    fn skeleton_names_every_result_field() {
        for field in [
            "\"image_type\"",
            "\"people_detected\"",
            "\"ai_artifact_score\"",
            "\"manipulation_score\"",
            "\"realism_score\"",
            "\"is_fake\"",
            "\"truth_score\"",
            "\"reasoning\"",
            "\"is_public_figure\"",
        ] {
            assert!(analysis_prompt().contains(field), "missing {field}");
        }
    }

    #[test]
    fn forbids_guessing_and_markup() {
        let p = analysis_prompt();
        assert!(p.contains("Do NOT hallucinate identities."));
        assert!(p.contains("return \"unknown\""));
        assert!(p.contains("RETURN VALID JSON ONLY."));
        assert!(p.contains("100 = very real"));
        assert!(p.contains("0 = very fake"));
    }
}
