use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("control points need at least two entries, got {0}")]
    TooFewPoints(usize),
    #[error("input and output control points differ in length ({input} vs {output})")]
    LengthMismatch { input: usize, output: usize },
    #[error("input control points must be strictly increasing (index {0})")]
    NotIncreasing(usize),
    #[error("element is not mounted")]
    NotMounted,
    #[error("{0} is not available in this browser")]
    Unsupported(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for MotionError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        MotionError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown theme `{0}`")]
pub struct ThemeError(pub String);
