use crate::content::PageKind;

/// Token classes the editor pane can colorize. These mirror the syntax
/// classes of a code editor theme rather than any real grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Comment,
    SectionTitle,
    ProperNoun,
    TechnicalTerm,
    ConnectorWord,
    Emphasis,
    GameName,
    Number,
    EmailLink,
    ContactLabel,
    LanguageLabel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub kind: SpanKind,
}

/// Decorates one logical (or wrapped physical) line for its page. Earlier
/// rules win; overlapping later matches are skipped, and nothing inside a
/// `//` comment is ever re-colored.
pub fn highlight_line(page: PageKind, line: &str) -> Vec<Span<'_>> {
    match page {
        PageKind::Welcome => welcome_spans(line),
        PageKind::Interests => interests_spans(line),
        PageKind::Favorites => favorites_spans(line),
        PageKind::Dreams => dreams_spans(line),
        PageKind::Experience => experience_spans(line),
        PageKind::Skills => skills_spans(line),
        PageKind::BackendProjects => comment_line(line),
        _ => plain(line),
    }
}

fn plain(line: &str) -> Vec<Span<'_>> {
    vec![Span {
        text: line,
        kind: SpanKind::Plain,
    }]
}

fn comment_line(line: &str) -> Vec<Span<'_>> {
    if line.trim_start().starts_with("//") {
        vec![Span {
            text: line,
            kind: SpanKind::Comment,
        }]
    } else {
        plain(line)
    }
}

fn welcome_spans(line: &str) -> Vec<Span<'_>> {
    let mut set = MatchSet::new(line);
    set.add_comment_tail();
    set.add_terms(&["Hello World"], SpanKind::SectionTitle, CASELESS_WORD);
    set.add_terms(&["Yve"], SpanKind::ProperNoun, WORD);
    set.add_terms(
        &["独立开发者", "软件工程师", "software engineer", "indie builder"],
        SpanKind::TechnicalTerm,
        CASELESS,
    );
    set.add_terms(&["machine", "human"], SpanKind::TechnicalTerm, CASELESS_WORD);
    set.add_terms(&["机器", "人类"], SpanKind::TechnicalTerm, BARE);
    set.add_terms(&["email"], SpanKind::EmailLink, CASELESS_WORD);
    set.add_terms(&["邮箱"], SpanKind::EmailLink, BARE);
    set.add_terms(
        &["还是", "来到", "选择", "可以", "还", "或"],
        SpanKind::ConnectorWord,
        BARE,
    );
    set.add_terms(&["or", "to", "via"], SpanKind::ConnectorWord, CASELESS_WORD);
    set.add_terms(&["Contact"], SpanKind::ContactLabel, CASELESS_WORD);
    set.add_terms(&["联系方式"], SpanKind::ContactLabel, BARE);
    set.add_terms(&["language"], SpanKind::LanguageLabel, CASELESS_WORD);
    set.add_terms(&["语言"], SpanKind::LanguageLabel, BARE);
    set.into_spans()
}

fn interests_spans(line: &str) -> Vec<Span<'_>> {
    let mut set = MatchSet::new(line);
    set.add_terms(
        &[
            "虚拟/增强现实：",
            "游戏开发：",
            "人工智能：",
            "VR/AR:",
            "Game Dev:",
            "AI:",
        ],
        SpanKind::SectionTitle,
        BARE,
    );
    set.add_terms(&["Hsin-Chien Huang"], SpanKind::ProperNoun, WORD);
    set.add_terms(&["黄心健"], SpanKind::ProperNoun, BARE);
    set.add_terms(&["Unity", "Game Jam", "AI"], SpanKind::TechnicalTerm, WORD);
    set.add_terms(&["应用", "在", "或", "尤其"], SpanKind::ConnectorWord, BARE);
    set.add_term_except_after("能", SpanKind::ConnectorWord, "希望");
    set.add_term_except_after("像", SpanKind::ConnectorWord, "偶");
    set.add_term_except_after("用", SpanKind::ConnectorWord, "应");
    set.add_terms(
        &["in", "as", "with", "to"],
        SpanKind::ConnectorWord,
        CASELESS_WORD,
    );
    set.into_spans()
}

fn favorites_spans(line: &str) -> Vec<Span<'_>> {
    let mut set = MatchSet::new(line);
    set.add_terms(
        &[
            "最喜欢的游戏：",
            "最喜欢的城市：",
            "Favorite Game:",
            "Favorite City:",
        ],
        SpanKind::SectionTitle,
        BARE,
    );
    set.add_terms(&["Paris"], SpanKind::ProperNoun, WORD);
    set.add_terms(&["巴黎"], SpanKind::ProperNoun, BARE);
    set.add_terms(
        &[
            "Rusty Lake",
            "Detroit: Become Human",
            "《底特律：变人》",
            "《锈湖》",
        ],
        SpanKind::GameName,
        BARE,
    );
    set.add_terms(
        &[
            "MOBAs",
            "Souls-likes",
            "Computer Science",
            "MOBA",
            "魂系",
            "计算机科学",
        ],
        SpanKind::TechnicalTerm,
        BARE,
    );
    set.add_terms(&["那样", "那里"], SpanKind::ConnectorWord, BARE);
    set.add_terms(&["for", "where"], SpanKind::ConnectorWord, CASELESS_WORD);
    set.add_terms(&["18"], SpanKind::Number, WORD);
    set.into_spans()
}

fn dreams_spans(line: &str) -> Vec<Span<'_>> {
    let mut set = MatchSet::new(line);
    set.add_terms(&["希望", "期待"], SpanKind::ConnectorWord, BARE);
    set.add_term_except_after("想", SpanKind::ConnectorWord, "不");
    set.add_terms(
        &["wants", "hopes", "hope"],
        SpanKind::ConnectorWord,
        CASELESS_WORD,
    );
    // Longest phrases first so e.g. "value to society" beats a bare "to".
    set.add_terms(
        &[
            "imaginative and artistic minds",
            "small group of people",
            "trustworthy engineer",
            "value to society",
            "change the world",
            "beautiful things",
            "fits her best",
            "最适合她的",
            "一小部分人",
            "工程师",
        ],
        SpanKind::Emphasis,
        CASELESS,
    );
    let spans = set.into_spans();
    // A few of the emphasis phrases render in the technical-term blue.
    spans
        .into_iter()
        .map(|span| {
            let blue = matches!(
                span.text,
                "trustworthy engineer"
                    | "small group of people"
                    | "fits her best"
                    | "工程师"
                    | "一小部分人"
                    | "最适合她的"
            );
            if span.kind == SpanKind::Emphasis && blue {
                Span {
                    text: span.text,
                    kind: SpanKind::TechnicalTerm,
                }
            } else {
                span
            }
        })
        .collect()
}

fn experience_spans(line: &str) -> Vec<Span<'_>> {
    let mut set = MatchSet::new(line);
    for title in ["Education:", "Professional:", "教育背景：", "职业经历："] {
        if line.starts_with(title) {
            set.add(0, title.len(), SpanKind::SectionTitle);
        }
    }
    set.add_comment_tail();
    set.add_terms(
        &["哥伦比亚大学", "欧洲高等商学院", "字节跳动", "育碧"],
        SpanKind::ProperNoun,
        BARE,
    );
    set.add_terms(
        &[
            "Columbia University",
            "ESCP Business School",
            "ByteDance",
            "Ubisoft",
        ],
        SpanKind::ProperNoun,
        WORD,
    );
    set.add_terms(&["计算机科学", "管理学"], SpanKind::TechnicalTerm, BARE);
    set.add_terms(
        &["B.A.", "B.S.", "Computer Science", "Management"],
        SpanKind::TechnicalTerm,
        WORD,
    );
    set.add_terms(&["后端开发", "项目管理"], SpanKind::TechnicalTerm, BARE);
    set.add_terms(&["SWE", "PM"], SpanKind::TechnicalTerm, WORD);
    set.add_terms(
        &["2025年", "2024年", "5-8月", "2025", "2024", "May", "Aug"],
        SpanKind::Number,
        WORD,
    );
    set.add_terms(&["本科"], SpanKind::ConnectorWord, BARE);
    set.add_terms(&["in"], SpanKind::ConnectorWord, CASELESS_WORD);
    set.into_spans()
}

fn skills_spans(line: &str) -> Vec<Span<'_>> {
    match line {
        "Game Dev:" | "Backend Dev:" | "游戏开发：" | "后端开发：" => vec![Span {
            text: line,
            kind: SpanKind::SectionTitle,
        }],
        _ => plain(line),
    }
}

#[derive(Clone, Copy)]
struct MatchOptions {
    caseless: bool,
    word_boundary: bool,
}

const BARE: MatchOptions = MatchOptions {
    caseless: false,
    word_boundary: false,
};
const WORD: MatchOptions = MatchOptions {
    caseless: false,
    word_boundary: true,
};
const CASELESS: MatchOptions = MatchOptions {
    caseless: true,
    word_boundary: false,
};
const CASELESS_WORD: MatchOptions = MatchOptions {
    caseless: true,
    word_boundary: true,
};

/// Accumulates non-overlapping byte-range matches over one line. Earlier
/// additions shadow later ones; comment ranges additionally block anything
/// that would land inside them.
struct MatchSet<'a> {
    text: &'a str,
    // Lowercased copy for caseless search; ASCII-only folding keeps byte
    // offsets stable for the CJK content.
    folded: String,
    matches: Vec<(usize, usize, SpanKind)>,
}

impl<'a> MatchSet<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            folded: text.to_ascii_lowercase(),
            matches: Vec::new(),
        }
    }

    fn overlaps(&self, start: usize, end: usize) -> bool {
        self.matches
            .iter()
            .any(|&(s, e, _)| start < e && end > s)
    }

    fn in_comment(&self, start: usize) -> bool {
        self.matches
            .iter()
            .any(|&(s, e, kind)| kind == SpanKind::Comment && start >= s && start < e)
    }

    fn add(&mut self, start: usize, end: usize, kind: SpanKind) {
        if !self.overlaps(start, end) {
            self.matches.push((start, end, kind));
        }
    }

    /// `// …` to the end of the line.
    fn add_comment_tail(&mut self) {
        if let Some(index) = self.text.find("//") {
            self.add(index, self.text.len(), SpanKind::Comment);
        }
    }

    fn add_terms(&mut self, terms: &[&str], kind: SpanKind, options: MatchOptions) {
        for term in terms {
            self.add_term(term, kind, options, None);
        }
    }

    /// Adds a term except where the preceding text ends with `unless_after`
    /// (e.g. 用 inside 应用).
    fn add_term_except_after(&mut self, term: &str, kind: SpanKind, unless_after: &str) {
        self.add_term(term, kind, BARE, Some(unless_after));
    }

    fn add_term(
        &mut self,
        term: &str,
        kind: SpanKind,
        options: MatchOptions,
        unless_after: Option<&str>,
    ) {
        if term.is_empty() {
            return;
        }
        let needle = if options.caseless {
            term.to_ascii_lowercase()
        } else {
            term.to_string()
        };

        let mut from = 0;
        // Recompute the haystack reference per iteration so its immutable borrow
        // of `self` is released before the `self.add` mutable borrow below.
        while let Some(found) =
            (if options.caseless { self.folded.as_str() } else { self.text })[from..].find(&needle)
        {
            let start = from + found;
            let end = start + needle.len();
            from = start + needle.len().max(1);

            if options.word_boundary && !at_word_boundary(self.text, start, end) {
                continue;
            }
            if let Some(preceding) = unless_after {
                if self.text[..start].ends_with(preceding) {
                    continue;
                }
            }
            if self.in_comment(start) {
                continue;
            }
            self.add(start, end, kind);
        }
    }

    fn into_spans(mut self) -> Vec<Span<'a>> {
        self.matches.sort_by_key(|&(start, _, _)| start);
        let mut spans = Vec::new();
        let mut cursor = 0;
        for (start, end, kind) in self.matches {
            if start > cursor {
                spans.push(Span {
                    text: &self.text[cursor..start],
                    kind: SpanKind::Plain,
                });
            }
            spans.push(Span {
                text: &self.text[start..end],
                kind,
            });
            cursor = end;
        }
        if cursor < self.text.len() {
            spans.push(Span {
                text: &self.text[cursor..],
                kind: SpanKind::Plain,
            });
        }
        if spans.is_empty() {
            spans.push(Span {
                text: self.text,
                kind: SpanKind::Plain,
            });
        }
        spans
    }
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

// Word boundaries only apply against ASCII word characters; CJK neighbors
// never block a match.
fn at_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let starts_word = bytes.get(start).copied().is_some_and(is_word_byte);
    let ends_word = end > start && is_word_byte(bytes[end - 1]);
    if starts_word && start > 0 && is_word_byte(bytes[start - 1]) {
        return false;
    }
    if ends_word && end < bytes.len() && is_word_byte(bytes[end]) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_of<'a>(spans: &'a [Span<'a>], kind: SpanKind) -> Vec<&'a str> {
        spans
            .iter()
            .filter(|span| span.kind == kind)
            .map(|span| span.text)
            .collect()
    }

    fn reassembles(page: PageKind, line: &str) {
        let joined: String = highlight_line(page, line)
            .iter()
            .map(|span| span.text)
            .collect();
        assert_eq!(joined, line);
    }

    #[test]
    fn spans_always_reassemble_the_line() {
        for (page, lang) in [
            (PageKind::Welcome, crate::i18n::Language::EnUs),
            (PageKind::Welcome, crate::i18n::Language::ZhCn),
            (PageKind::Interests, crate::i18n::Language::EnUs),
            (PageKind::Favorites, crate::i18n::Language::ZhCn),
            (PageKind::Dreams, crate::i18n::Language::EnUs),
            (PageKind::Experience, crate::i18n::Language::ZhCn),
        ] {
            for line in crate::content::page_lines(page, lang) {
                reassembles(page, line);
            }
        }
    }

    #[test]
    fn welcome_highlights_greeting_and_name() {
        let spans =
            highlight_line(PageKind::Welcome, "Hello World — welcome to Yve's personal website!");
        assert_eq!(kinds_of(&spans, SpanKind::SectionTitle), vec!["Hello World"]);
        assert_eq!(kinds_of(&spans, SpanKind::ProperNoun), vec!["Yve"]);
        assert!(kinds_of(&spans, SpanKind::ConnectorWord).contains(&"to"));
    }

    #[test]
    fn welcome_comment_shadows_term_rules() {
        let spans = highlight_line(
            PageKind::Welcome,
            "Please select your preferred Language from the top bar to begin exploring. // some language features under construction",
        );
        // One Language token styled, the one inside the comment untouched.
        assert_eq!(kinds_of(&spans, SpanKind::LanguageLabel), vec!["Language"]);
        let comment = kinds_of(&spans, SpanKind::Comment);
        assert_eq!(comment.len(), 1);
        assert!(comment[0].starts_with("// some"));
    }

    #[test]
    fn welcome_email_is_a_link() {
        let spans = highlight_line(
            PageKind::Welcome,
            "Reach out via Email, or open Contact from the left panel for more info.",
        );
        assert_eq!(kinds_of(&spans, SpanKind::EmailLink), vec!["Email"]);
        assert_eq!(kinds_of(&spans, SpanKind::ContactLabel), vec!["Contact"]);
        assert!(kinds_of(&spans, SpanKind::ConnectorWord).contains(&"via"));
    }

    #[test]
    fn interests_keeps_idol_and_category() {
        let spans = highlight_line(
            PageKind::Interests,
            "VR/AR: Her idol in this field is Hsin-Chien Huang, and she hopes to create artworks as emotionally powerful as his.",
        );
        assert_eq!(kinds_of(&spans, SpanKind::SectionTitle), vec!["VR/AR:"]);
        assert_eq!(
            kinds_of(&spans, SpanKind::ProperNoun),
            vec!["Hsin-Chien Huang"]
        );
    }

    #[test]
    fn interests_cjk_exceptions_hold() {
        let spans = highlight_line(
            PageKind::Interests,
            "她在这个领域的偶像是黄心健，希望能像他一样创作出震撼人心的艺术作品。",
        );
        let connectors = kinds_of(&spans, SpanKind::ConnectorWord);
        // 像 after 偶 and 能 after 希望 are skipped; the standalone 像 matches.
        assert!(connectors.contains(&"在"));
        assert!(connectors.contains(&"像"));
        assert_eq!(connectors.iter().filter(|t| **t == "像").count(), 1);
        assert!(!connectors.contains(&"能"));
        assert_eq!(kinds_of(&spans, SpanKind::ProperNoun), vec!["黄心健"]);
    }

    #[test]
    fn favorites_separates_games_from_terms() {
        let spans = highlight_line(
            PageKind::Favorites,
            "Favorite Game: She loves puzzle games like Rusty Lake for their retro, eerie and distinctive style, and story-driven interactive titles like Detroit: Become Human, where player choices shape the plot. She's not into hardcore games like MOBAs or Souls-likes — she's just bad at them.",
        );
        assert_eq!(
            kinds_of(&spans, SpanKind::GameName),
            vec!["Rusty Lake", "Detroit: Become Human"]
        );
        let terms = kinds_of(&spans, SpanKind::TechnicalTerm);
        assert!(terms.contains(&"MOBAs"));
        assert!(terms.contains(&"Souls-likes"));
    }

    #[test]
    fn favorites_number_is_tagged() {
        let spans = highlight_line(
            PageKind::Favorites,
            "Favorite City: Paris. She spent her most carefree 18 there.",
        );
        assert_eq!(kinds_of(&spans, SpanKind::Number), vec!["18"]);
        assert_eq!(kinds_of(&spans, SpanKind::ProperNoun), vec!["Paris"]);
    }

    #[test]
    fn dreams_splits_blue_and_emphasis_phrases() {
        let spans = highlight_line(
            PageKind::Dreams,
            "She hopes to become a trustworthy engineer, creating beautiful things together with imaginative and artistic minds.",
        );
        assert_eq!(
            kinds_of(&spans, SpanKind::TechnicalTerm),
            vec!["trustworthy engineer"]
        );
        let emphasis = kinds_of(&spans, SpanKind::Emphasis);
        assert!(emphasis.contains(&"beautiful things"));
        assert!(emphasis.contains(&"imaginative and artistic minds"));
        assert!(kinds_of(&spans, SpanKind::ConnectorWord).contains(&"hopes"));
    }

    #[test]
    fn dreams_skips_negated_wish() {
        let spans = highlight_line(PageKind::Dreams, "她不想改变世界，只想尽最大努力找到一个最适合她的位置。");
        let connectors = kinds_of(&spans, SpanKind::ConnectorWord);
        // The 想 inside 不想 stays plain; the later bare 想 matches.
        assert_eq!(connectors.iter().filter(|t| **t == "想").count(), 1);
        assert_eq!(
            kinds_of(&spans, SpanKind::TechnicalTerm),
            vec!["最适合她的"]
        );
    }

    #[test]
    fn experience_comments_stay_gray() {
        let spans = highlight_line(
            PageKind::Experience,
            "ByteDance  —  SWE Intern        // May–Aug 2025",
        );
        assert_eq!(kinds_of(&spans, SpanKind::ProperNoun), vec!["ByteDance"]);
        assert_eq!(kinds_of(&spans, SpanKind::TechnicalTerm), vec!["SWE"]);
        // The date lives inside the comment and is not re-colored.
        assert!(kinds_of(&spans, SpanKind::Number).is_empty());
        assert_eq!(kinds_of(&spans, SpanKind::Comment).len(), 1);
    }

    #[test]
    fn experience_section_titles_anchor_to_line_start() {
        let spans = highlight_line(PageKind::Experience, "Education:");
        assert_eq!(kinds_of(&spans, SpanKind::SectionTitle), vec!["Education:"]);
        let spans = highlight_line(
            PageKind::Experience,
            "Columbia University  —  B.A. in Computer Science  // Current Student",
        );
        assert!(kinds_of(&spans, SpanKind::SectionTitle).is_empty());
        let terms = kinds_of(&spans, SpanKind::TechnicalTerm);
        assert!(terms.contains(&"B.A."));
        assert!(terms.contains(&"Computer Science"));
        assert_eq!(kinds_of(&spans, SpanKind::ConnectorWord), vec!["in"]);
    }

    #[test]
    fn backend_projects_is_one_comment() {
        let spans = highlight_line(
            PageKind::BackendProjects,
            "// Coming soon — she's debugging reality (recently)",
        );
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, SpanKind::Comment);
    }

    #[test]
    fn skills_titles_only() {
        assert_eq!(
            highlight_line(PageKind::Skills, "Game Dev:")[0].kind,
            SpanKind::SectionTitle
        );
        assert_eq!(
            highlight_line(PageKind::Skills, "anything else")[0].kind,
            SpanKind::Plain
        );
    }

    #[test]
    fn word_boundaries_respect_ascii_words() {
        // "or" must not fire inside "World" or "for".
        let spans = highlight_line(PageKind::Welcome, "Hello World for or");
        assert_eq!(kinds_of(&spans, SpanKind::ConnectorWord), vec!["or"]);
    }
}
