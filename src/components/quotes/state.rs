use std::time::Duration;

use rand::Rng;

pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote { text: "The only bad workout is the one that didn't happen.", author: "Unknown" },
    Quote { text: "Sweat is just fat crying.", author: "Unknown" },
    Quote { text: "Don't limit your challenges - challenge your limits.", author: "Jerry Dunn" },
    Quote { text: "You are one workout away from a good mood.", author: "Unknown" },
    Quote {
        text: "Discipline is doing what needs to be done even if you don't want to.",
        author: "Unknown",
    },
    Quote { text: "Progress, not perfection.", author: "Unknown" },
];

/// Auto-advance period of the quote panel.
pub const ROTATE_EVERY: Duration = Duration::from_secs(9);

#[derive(Debug, Default)]
pub struct QuoteRotator {
    index: usize,
    next_rotation: Option<Duration>,
}

impl QuoteRotator {
    pub fn current(&self) -> &'static Quote {
        &QUOTES[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Shows quote `i`, wrapping around in both directions.
    pub fn show(&mut self, i: isize) {
        self.index = i.rem_euclid(QUOTES.len() as isize) as usize;
    }

    pub fn next(&mut self) {
        self.show(self.index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.show(self.index as isize - 1);
    }

    pub fn random(&mut self) {
        let i = rand::rng().random_range(0..QUOTES.len());
        self.show(i as isize);
    }

    /// Advances on a fixed cadence, independent of manual navigation.
    pub fn tick(&mut self, now: Duration) {
        match self.next_rotation {
            None => self.next_rotation = Some(now + ROTATE_EVERY),
            Some(due) if now >= due => {
                self.next();
                self.next_rotation = Some(now + ROTATE_EVERY);
            }
            Some(_) => {}
        }
    }

    pub fn repaint_after(&self, now: Duration) -> Option<Duration> {
        self.next_rotation.map(|due| due.saturating_sub(now))
    }
}
