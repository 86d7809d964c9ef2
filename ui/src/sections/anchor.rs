//! In-page anchors and the scroll-spy that tracks them.

/// Sections that own a stable element id on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Features,
    HowItWorks,
    Pricing,
    Testimonials,
    Faq,
}

impl Section {
    /// Sections listed in the navbar, in page order. Scroll-spy only ever
    /// reports one of these.
    pub const NAV: [Section; 4] = [
        Section::Home,
        Section::Features,
        Section::Pricing,
        Section::Testimonials,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Features => "features",
            Section::HowItWorks => "how-it-works",
            Section::Pricing => "pricing",
            Section::Testimonials => "testimonials",
            Section::Faq => "faq",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        [
            Section::Home,
            Section::Features,
            Section::HowItWorks,
            Section::Pricing,
            Section::Testimonials,
            Section::Faq,
        ]
        .into_iter()
        .find(|section| section.id() == id)
    }

    /// Translation key of the navbar label.
    pub fn nav_label_key(self) -> &'static str {
        match self {
            Section::Home => "nav.home",
            Section::Features => "nav.features",
            Section::HowItWorks => "how-it-works.title",
            Section::Pricing => "nav.pricing",
            Section::Testimonials => "nav.testimonials",
            Section::Faq => "faq.title",
        }
    }
}

/// Navbar state derived from the window scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpy {
    scrolled_threshold_px: f64,
    activation_offset_px: f64,
    scrolled: bool,
}

impl ScrollSpy {
    pub fn new(scrolled_threshold_px: f64, activation_offset_px: f64) -> Self {
        Self {
            scrolled_threshold_px,
            activation_offset_px,
            scrolled: false,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feed one scroll sample. Returns the section that should now be active,
    /// or `None` to keep whatever is active.
    ///
    /// Sections are scanned bottom-up; the first whose top edge (minus the
    /// activation offset) is at or above `scroll_y` wins. Sections missing
    /// from the document are skipped.
    pub fn observe(&mut self, scroll_y: f64, offsets: &[(Section, Option<f64>)]) -> Option<Section> {
        self.scrolled = scroll_y > self.scrolled_threshold_px;
        Section::NAV.into_iter().rev().find(|section| {
            offsets
                .iter()
                .find(|(s, _)| s == section)
                .and_then(|(_, top)| *top)
                .is_some_and(|top| scroll_y >= top - self.activation_offset_px)
        })
    }
}
