pub mod paginator;
pub mod question_service;
pub mod quiz_selector;

pub use paginator::{paginate, parse_page_number, QUESTIONS_PER_PAGE};
pub use question_service::{CategoryListing, QuestionListing, QuestionService, SearchOutcome};
pub use quiz_selector::QuizSelector;
