/// An option enum that can be written in the config file either by its
/// position (`cursor_style = 1`) or by its snake_case name
/// (`cursor_style = line`).
pub trait Choice: Copy + PartialEq + 'static {
    /// Variants in index order.
    const VARIANTS: &'static [(&'static str, Self)];

    fn parse_choice(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::VARIANTS.get(index).map(|(_, v)| *v);
        }
        Self::VARIANTS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, v)| *v)
    }

    fn name(self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(_, v)| *v == self)
            .map(|(name, _)| *name)
            .unwrap_or("unknown")
    }
}
