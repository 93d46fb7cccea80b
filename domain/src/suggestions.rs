/// Example questions offered on the welcome screen.
pub const SUGGESTION_CATALOG: [&str; 7] = [
    "Describe a UI Bart built — problem, tech, tradeoffs.",
    "How does Bart make UIs fast, accessible, and cross-device?",
    "Share a time Bart and a designer or PM disagreed — what happened and outcome?",
    "Would this person be good for a Series B startup with messy data infrastructure?",
    "Tell me about their biggest failure.",
    "What kind of leadership experience do they have?",
    "How do they approach UI/UX design and development?",
];

pub fn default_catalog() -> Vec<String> {
    SUGGESTION_CATALOG.iter().map(|s| s.to_string()).collect()
}
