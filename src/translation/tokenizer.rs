/*!
 * Text segmentation into word and filler runs.
 *
 * Input text is partitioned into maximal runs of alphabetic characters
 * (words) and maximal runs of everything else (fillers). Digits and
 * punctuation are not distinguished; both end up in fillers.
 */

/// One maximal run of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Alphabetic run; `current` starts as a copy of `original` and receives the translation
    Word { original: String, current: String },

    /// Non-alphabetic run, never translated
    Filler { text: String },
}

impl Segment {
    /// Create a word segment whose current text equals its original text
    pub fn word(text: impl Into<String>) -> Self {
        let original = text.into();
        Self::Word {
            current: original.clone(),
            original,
        }
    }

    /// Create a filler segment
    pub fn filler(text: impl Into<String>) -> Self {
        Self::Filler { text: text.into() }
    }

    /// Text as it appeared in the input
    pub fn original(&self) -> &str {
        match self {
            Self::Word { original, .. } => original,
            Self::Filler { text } => text,
        }
    }

    /// Text as it will be written out
    pub fn current(&self) -> &str {
        match self {
            Self::Word { current, .. } => current,
            Self::Filler { text } => text,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Self::Word { .. })
    }
}

/// Ordered, lossless segmentation of a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedText {
    segments: Vec<Segment>,
}

impl ParsedText {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Original text of every word segment, in document order, duplicates included
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Word { original, .. } => Some(original.as_str()),
            Segment::Filler { .. } => None,
        })
    }

    /// Replace the current text of every word whose original text is exactly `original`
    ///
    /// Returns the number of segments touched.
    pub fn replace_word(&mut self, original: &str, replacement: &str) -> usize {
        let mut replaced = 0;
        for segment in &mut self.segments {
            if let Segment::Word { original: orig, current } = segment {
                if orig.as_str() == original {
                    current.clear();
                    current.push_str(replacement);
                    replaced += 1;
                }
            }
        }
        replaced
    }

    /// Concatenate the current text of every segment
    pub fn collect(&self) -> String {
        self.segments.iter().map(Segment::current).collect()
    }

    /// Concatenate the original text of every segment; always equals the parsed input
    pub fn collect_original(&self) -> String {
        self.segments.iter().map(Segment::original).collect()
    }

    fn push_run(&mut self, run: String, alphabetic: bool) {
        if run.is_empty() {
            return;
        }
        let segment = if alphabetic {
            Segment::word(run)
        } else {
            Segment::filler(run)
        };
        self.segments.push(segment);
    }
}

/// Split `content` into alternating word and filler segments
pub fn parse(content: &str) -> ParsedText {
    let mut parsed = ParsedText::default();

    let mut chars = content.chars().peekable();
    let Some(first) = chars.peek() else {
        return parsed;
    };

    let mut last_was_alpha = first.is_alphabetic();
    let mut run = String::new();

    for ch in chars {
        let is_alpha = ch.is_alphabetic();
        if is_alpha != last_was_alpha {
            parsed.push_run(std::mem::take(&mut run), last_was_alpha);
            last_was_alpha = is_alpha;
        }
        run.push(ch);
    }

    parsed.push_run(run, last_was_alpha);
    parsed
}
