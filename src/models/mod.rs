pub mod category;
pub mod loaders;
pub mod question;
pub mod quiz;

pub use category::{categories_map, Category, CategoryId};
pub use loaders::{load_seed, parse_seed, SeedData};
pub use question::{NewQuestion, Question, QuestionId};
pub use quiz::{QuizCategory, QuizOutcome, QuizRequest, QuizScope};
