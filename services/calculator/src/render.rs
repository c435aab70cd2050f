use serde::{Deserialize, Serialize};

use expression::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub kind: &'static str,
    pub message: String,
}

impl From<&EvalError> for ErrorResponse {
    fn from(e: &EvalError) -> Self {
        let kind = match e {
            EvalError::Syntax(_) => "syntax",
            EvalError::Math(_) => "math",
        };
        ErrorResponse {
            kind,
            message: e.to_string(),
        }
    }
}

/// Snapshot of what the calculator shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl OutputFormat {
    pub fn render(self, frame: &Frame) -> Result<String, serde_json::Error> {
        match self {
            OutputFormat::Text => Ok(match &frame.error {
                Some(error) => format!("{} ({})", frame.display, error.message),
                None => frame.display.clone(),
            }),
            OutputFormat::Json => serde_json::to_string(frame),
        }
    }
}

#[cfg(test)]
mod tests {
    use expression::MathError;

    use super::*;

    #[test]
    fn test_render_text() -> Result<(), Box<dyn std::error::Error>> {
        let frame = Frame {
            display: "14".to_string(),
            result: Some("14".to_string()),
            error: None,
        };
        assert_eq!(OutputFormat::Text.render(&frame)?, "14");

        let frame = Frame {
            display: "Error".to_string(),
            result: None,
            error: Some(ErrorResponse::from(&EvalError::Math(
                MathError::DivisionByZero,
            ))),
        };
        assert_eq!(
            OutputFormat::Text.render(&frame)?,
            "Error (Math Error: Division by zero)"
        );
        Ok(())
    }

    #[test]
    fn test_render_json() -> Result<(), Box<dyn std::error::Error>> {
        let frame = Frame {
            display: "2+".to_string(),
            result: Some("5".to_string()),
            error: None,
        };
        assert_eq!(
            OutputFormat::Json.render(&frame)?,
            r#"{"display":"2+","result":"5"}"#
        );

        let frame = Frame {
            display: "Error".to_string(),
            result: None,
            error: Some(ErrorResponse::from(&EvalError::Math(MathError::NonFinite))),
        };
        assert_eq!(
            OutputFormat::Json.render(&frame)?,
            r#"{"display":"Error","error":{"kind":"math","message":"Math Error: Result is not a finite number"}}"#
        );
        Ok(())
    }
}
