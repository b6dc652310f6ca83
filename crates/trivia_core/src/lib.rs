pub mod domain;
pub mod pagination;
pub mod ports;
pub mod quiz;
pub mod search;

pub use domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
pub use pagination::{paginate, PageError, PageNumber, PAGE_SIZE};
pub use ports::{PortError, PortResult, QuestionStore};
pub use quiz::{next_question, QuizOutcome};
pub use search::{search, SearchError, SearchTerm};
