//! Food photo analysis: prompt construction, permissive reply parsing, and
//! the fixed fallback estimate.
//!
//! The vision model is asked for a strict JSON shape but real replies come
//! wrapped in prose or markdown fences, so parsing digs out the first
//! balanced JSON object and falls back to a generic "Mixed meal" estimate
//! whenever nothing usable can be read. Parsing itself never fails.

use base64::engine::general_purpose;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::vision::{VisionClient, VisionError};

pub const SYSTEM_PROMPT: &str = r#"You are a food recognition and nutrition expert. Analyze food images and provide detailed nutritional information. Always respond in JSON format with the following structure:
{
  "items": [
    {
      "name": "food item name",
      "calories": number,
      "protein": number,
      "carbs": number,
      "fats": number
    }
  ]
}
Estimate portions based on typical serving sizes. Be conservative with calorie estimates."#;

pub const INSTRUCTION: &str = "Identify all food items in this image and estimate their nutritional values. Return only the JSON response.";

/// One recognized food item. Every field is optional in the model's reply,
/// so missing values default instead of failing the whole analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// The reply must at least carry an `items` array; anything without one is
/// treated as unparseable.
#[derive(Debug, Deserialize)]
struct ReplyPayload {
    items: Vec<FoodItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodAnalysis {
    pub items: Vec<FoodItem>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
}

/// Encode raw image bytes as a data URL for the vision API.
pub fn to_data_url(bytes: &[u8], mime_type: &str) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Run one photo through the vision model and parse whatever comes back.
pub async fn analyze(
    vision: &dyn VisionClient,
    image_data_url: &str,
) -> Result<FoodAnalysis, VisionError> {
    let reply = vision
        .complete(SYSTEM_PROMPT, image_data_url, INSTRUCTION)
        .await?;
    Ok(parse_reply(&reply))
}

/// Parse the model's free-text reply into an analysis. Infallible: when no
/// JSON object with an item list can be extracted, the fixed fallback
/// estimate stands in.
pub fn parse_reply(reply: &str) -> FoodAnalysis {
    let items = extract_json_object(reply)
        .and_then(|block| serde_json::from_str::<ReplyPayload>(block).ok())
        .map(|payload| payload.items)
        .unwrap_or_else(fallback_items);

    let (calories, protein, carbs, fats) =
        items.iter().fold((0.0, 0.0, 0.0, 0.0), |acc, item| {
            (
                acc.0 + item.calories,
                acc.1 + item.protein,
                acc.2 + item.carbs,
                acc.3 + item.fats,
            )
        });

    FoodAnalysis {
        items,
        total_calories: calories,
        total_protein: protein,
        total_carbs: carbs,
        total_fats: fats,
    }
}

fn fallback_items() -> Vec<FoodItem> {
    vec![FoodItem {
        name: "Mixed meal".to_string(),
        calories: 500.0,
        protein: 25.0,
        carbs: 50.0,
        fats: 20.0,
    }]
}

/// Return the first balanced top-level `{...}` block in `text`. The scan
/// tracks string literals so braces inside quoted values do not unbalance
/// the count.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
