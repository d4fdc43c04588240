use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitYearError>;

#[derive(Error, Debug)]
pub enum GitYearError {
    #[error("This directory is not a git repository.\nTry: cd into a project folder that uses git.")]
    NotARepository(#[source] Box<gix::discover::Error>),
    #[error("Invalid week start '{0}': expected Sunday or Monday")]
    InvalidWeekStart(String),
    #[error("Invalid range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("Invalid year: {0}")]
    InvalidYear(i32),
    #[error("I bet you will be super productive that year! ;)")]
    FutureYear(i32),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Object find error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Commit date error: {0}")]
    DateParse(#[from] Box<gix::date::parse::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::discover::Error> for GitYearError {
    fn from(err: gix::discover::Error) -> Self {
        GitYearError::NotARepository(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GitYearError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GitYearError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GitYearError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GitYearError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::date::parse::Error> for GitYearError {
    fn from(err: gix::date::parse::Error) -> Self {
        GitYearError::DateParse(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GitYearError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GitYearError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GitYearError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GitYearError::HeadPeel(Box::new(err))
    }
}
