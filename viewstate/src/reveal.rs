use crate::config::RevealConfig;

// card entrance animation
//
// cards start faded out and shifted down; the first time one scrolls into view it is
// revealed, and it stays revealed afterwards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardReveal {
    #[default]
    Hidden,
    Revealed,
}

pub const CARD_SELECTOR: &str = ".service-card, .team-card, .project-card";

impl CardReveal {
    // returns true only on the transition into Revealed
    pub fn intersected(&mut self, is_intersecting: bool) -> bool {
        match (*self, is_intersecting) {
            (CardReveal::Hidden, true) => {
                *self = CardReveal::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn opacity(self) -> &'static str {
        match self {
            CardReveal::Hidden => "0",
            CardReveal::Revealed => "1",
        }
    }

    pub fn transform(self, config: &RevealConfig) -> String {
        match self {
            CardReveal::Hidden => format!("translateY({}px)", config.offset_px),
            CardReveal::Revealed => String::from("translateY(0)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_styles() {
        let config = RevealConfig::default();
        let card = CardReveal::default();

        assert_eq!(card.opacity(), "0");
        assert_eq!(card.transform(&config), "translateY(30px)");
    }

    #[test]
    fn reveals_once_and_never_reverts() {
        let config = RevealConfig::default();
        let mut card = CardReveal::default();

        assert!(!card.intersected(false));
        assert_eq!(card, CardReveal::Hidden);

        assert!(card.intersected(true));
        assert_eq!(card.opacity(), "1");
        assert_eq!(card.transform(&config), "translateY(0)");

        assert!(!card.intersected(true));
        assert!(!card.intersected(false));
        assert_eq!(card, CardReveal::Revealed);
    }
}
