pub mod input;
pub mod outcome;
pub mod question;
pub mod respondent;
pub mod response;
pub mod result;
