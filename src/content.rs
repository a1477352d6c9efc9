use crate::frontend::log_to_console;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
}

pub fn faq_entries() -> Vec<FaqEntry> {
    parse(include_str!("../assets/faqs.json"))
}

pub fn testimonials() -> Vec<Testimonial> {
    parse(include_str!("../assets/testimonials.json"))
}

fn parse<T: DeserializeOwned>(raw: &str) -> Vec<T> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log_to_console(&format!("Deserialization error: {:?}", e));
        vec![]
    })
}
