//! Static content for the about page.

#[derive(Clone, Copy, Debug)]
pub struct Section {
    pub header: &'static str,
    pub caption: &'static str,
    /// Illustration shown below the caption, if any.
    pub image: Option<&'static str>,
}

pub static WELCOME: Section = Section {
    header: "WELCOME!",
    caption: "If you are reading this congratulations you are an early participant in this \
              project. Sudosix Research is building the magical architecture in anticipation \
              for the coming aeon where technology and magic blend into one. Lets start with a \
              brief introduction to the nature of our work.",
    image: None,
};

pub static SECTIONS: [Section; 6] = [
    Section {
        header: "PANDEMONAEON RISING!",
        caption: "If you are reading this congratulations you are an early participant in this \
                  project. Sudosix Research is building the magical architecture in \
                  anticipation for the coming aeon where technology and magic blend into one. \
                  Lets start with a brief introduction to the nature of our work.",
        image: Some("MENACE_ABOUT_1_p.png"),
    },
    Section {
        header: "ALIGNMENT IS ABUNDANCE",
        caption: "The physical world we understand is a shadow of the Etheric Plane - a pliable \
                  membrane of manifestation. This is where probabilities manifest into the \
                  physical reality around you and houses the truest version of yourself. You've \
                  surely noticed the luckiest and most fortunate among us operating with power \
                  in this field, because their physical body/will is more in line with their \
                  individual consciousness - the true self beyond thought.",
        image: Some("MENACE_ABOUT_2_p.png"),
    },
    Section {
        header: "TULPAMANCY IS THE MINDS BEST FRIEND",
        caption: "Your conscious mind is your biggest barrier from self actualization. The \
                  conscious 'lust of result' destroys the magical effectiveness of your will. \
                  Magic employs many 'sleight of mind' methods to bypass this hinderance, one of \
                  which is especially potent: the practice of tulpamancy. Traditionally these \
                  thought-forms are created through a ritual where they are programmed to serve \
                  a specific purpose then destroyed when the work is complete. Sudosix Research \
                  invites a contemporary approach utilizing immutable ledgers as a hosting \
                  mechanism for the conjuring, programming, feeding and dissolving of these \
                  etheric assistants.",
        image: Some("MENACE_ABOUT_3_p.png"),
    },
    Section {
        header: "MENACES GET RESULTS",
        caption: "MENACES are programmable tulpas\u{2014}semi-autonomous psychic constructs bound \
                  to their creators. Each MENACE is conjured through ritualized \
                  intention-setting, embedded with a singular directive, and anchored on-chain \
                  within the Ether. Once activated, your Menace begins to operate on the Etheric \
                  plane on your behalf carrying out the fulfillment of its embedded will. \
                  MENACES can be programmed to do anything you wish! bring you exciting \
                  opportunities, provide protection, attract wealth etc.",
        image: Some("MENACE_ABOUT_4_p.png"),
    },
    Section {
        header: "BUILT DIFFERENT",
        caption: "Unlike traditional tulpas, a MENACE is not bound to any particular \
                  space\u{2014}they exists in shared the global (and future interplanetary) \
                  immoral infrastructure of the Ethereum ledger. Every transaction, every act of \
                  observation, feeds it. Its life is the motion of data and desire.",
        image: Some("MENACE_ABOUT_5_p.png"),
    },
    Section {
        header: "DO NO HARM",
        caption: "Disclaimer: Sudosix Research assumes no responsibility for any \
                  phenomena\u{2014}psychic, economic, or interpersonal\u{2014}arising from your \
                  interaction with our magical infrastructure. All magic carries consequence and \
                  unrighteous acts in the Ether will attract the attention of beings that can \
                  harm you. Should your MENACE turn on you or cause undue trouble, burn the token \
                  to dissolve the link and nullify the tulpa.",
        image: Some("MENACE_ABOUT_6_p.png"),
    },
];

/// All sections in display order, starting with the welcome block.
pub fn sections() -> impl Iterator<Item = &'static Section> {
    std::iter::once(&WELCOME).chain(SECTIONS.iter())
}
