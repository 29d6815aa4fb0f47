pub mod experience;
pub mod matcher;
pub mod scoring;
pub mod similarity;
pub mod skills;
pub mod stop_words;
pub mod vocabulary;
