use ratatui::style::Color;

/// The six predefined category shortcuts on the home screen. A closed set:
/// unknown keys resolve to [`Category::DEFAULT`] instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum Category {
    Programming,
    Science,
    History,
    Technology,
    Geography,
    #[strum(serialize = "Pop Culture")]
    PopCulture,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Programming,
        Category::Science,
        Category::History,
        Category::Technology,
        Category::Geography,
        Category::PopCulture,
    ];

    pub const DEFAULT: Category = Category::Geography;

    /// Lookup by stable key, falling back to the default entry.
    pub fn from_key(key: &str) -> Category {
        match key {
            "programming" => Category::Programming,
            "science" => Category::Science,
            "history" => Category::History,
            "technology" => Category::Technology,
            "geography" => Category::Geography,
            "entertainment" => Category::PopCulture,
            _ => Category::DEFAULT,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::Programming => "programming",
            Category::Science => "science",
            Category::History => "history",
            Category::Technology => "technology",
            Category::Geography => "geography",
            Category::PopCulture => "entertainment",
        }
    }

    /// Topic string sent to the generation gateway.
    pub fn topic(&self) -> String {
        self.to_string()
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Programming => "</>",
            Category::Science => "[*]",
            Category::History => "(t)",
            Category::Technology => "[#]",
            Category::Geography => "(o)",
            Category::PopCulture => "[>]",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Category::Programming => Color::Blue,
            Category::Science => Color::Green,
            Category::History => Color::Yellow,
            Category::Technology => Color::Magenta,
            Category::Geography => Color::Cyan,
            Category::PopCulture => Color::LightRed,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Programming => "Test your coding knowledge across various languages.",
            Category::Science => "Explore the mysteries of the universe and biology.",
            Category::History => "Travel back in time to pivotal human moments.",
            Category::Technology => "Latest gadgets, innovations, and digital trends.",
            Category::Geography => "Discover countries, cultures, and landmarks.",
            Category::PopCulture => "Movies, games, and celebrity trivia.",
        }
    }
}
