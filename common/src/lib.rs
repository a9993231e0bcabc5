//! Pickabook Personalizer Common Library
//!
//! Types and state shared by the browser frontend. Kept free of browser
//! dependencies so the whole flow is testable natively.

pub mod comparison;
pub mod error;
pub mod generate;
pub mod payload;
pub mod session;
pub mod validate;

pub use comparison::{ComparisonSlider, DEFAULT_SLIDER_POSITION};
pub use error::{Error, GenerateError, Result};
pub use generate::{
    PersonalizeRequest, PersonalizeResponse, GENERATION_FAILED_MESSAGE, GENERATION_TIMEOUT_MS,
    MOCK_GENERATION_DELAY_MS,
};
pub use payload::ImagePayload;
pub use session::{AppState, GenerationTicket, Session};
pub use validate::{check_upload, picker_accept, ACCEPTED_MIME_TYPES, MAX_UPLOAD_BYTES};
