/// What a list item looks like; hosts pick markup per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// Landing page project card with a "READ MORE" action
    Project,
    /// Landing page testimonial card
    Client,
    /// Admin list row for a project or client
    ListItem,
    /// Admin contact row, two columns
    Contact,
    /// Admin newsletter row, email only
    Newsletter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
    /// Shown when `src` fails to load
    pub fallback: &'static str,
}

/// One rendered item. Text is plain, never markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    pub lines: Vec<String>,
    pub image: Option<CardImage>,
    pub action: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    Cards(Vec<Card>),
    /// The collection was empty
    Empty(String),
    /// Loading failed
    Error(String),
}

impl ListContent {
    pub fn cards(&self) -> &[Card] {
        match self {
            ListContent::Cards(cards) => cards,
            _ => &[],
        }
    }
}
