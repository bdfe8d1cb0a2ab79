use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub position: usize,
    pub title: Option<String>,
    pub body: Vec<String>,
    pub image: Option<PathBuf>,
}

impl Slide {
    /// Title used by the counter and announcements: the slide's own title,
    /// or "Slide N" when it has none.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Slide {}", self.position),
        }
    }
}

/// Fixed, ordered collection of slides. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            bail!("deck contains no slides");
        }
        for (index, slide) in slides.iter().enumerate() {
            if slide.position != index + 1 {
                bail!("slide at index {} is tagged {}", index, slide.position);
            }
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Slide at a 1-based position.
    pub fn get(&self, position: usize) -> Option<&Slide> {
        position.checked_sub(1).and_then(|i| self.slides.get(i))
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

// --- Markup Parsing ---

struct RawSlide {
    tag: Option<usize>,
    lines: Vec<String>,
}

/// Parses deck markup. Relative image paths are resolved against `base_dir`.
pub fn parse_deck(source: &str, base_dir: &Path) -> Result<Deck> {
    let mut raw: Vec<RawSlide> = Vec::new();

    for (line_no, line) in source.lines().enumerate() {
        if let Some(rest) = line.strip_prefix("---") {
            let rest = rest.trim();
            let tag = if rest.is_empty() {
                None
            } else {
                let tag: usize = rest
                    .parse()
                    .with_context(|| format!("line {}: invalid slide tag {:?}", line_no + 1, rest))?;
                if tag == 0 {
                    bail!("line {}: slide tags are 1-based, got 0", line_no + 1);
                }
                Some(tag)
            };
            raw.push(RawSlide { tag, lines: Vec::new() });
        } else if let Some(current) = raw.last_mut() {
            current.lines.push(line.to_string());
        }
        // Anything before the first separator is preamble
    }

    // A tag past the slide count always leaves a gap
    let count = raw.len();
    if let Some(tag) = raw.iter().filter_map(|slide| slide.tag).find(|tag| *tag > count) {
        bail!("slide tag {} is out of range for a deck of {} slides", tag, count);
    }

    // Untagged slides take the next position in order
    let mut tagged: Vec<(usize, Vec<String>)> = Vec::with_capacity(raw.len());
    let mut next_position = 1;
    for slide in raw {
        let position = slide.tag.unwrap_or(next_position);
        next_position = position + 1;
        tagged.push((position, slide.lines));
    }
    tagged.sort_by_key(|(position, _)| *position);

    let mut slides = Vec::with_capacity(tagged.len());
    for (index, (position, lines)) in tagged.into_iter().enumerate() {
        if position <= index {
            bail!("duplicate slide tag {}", position);
        }
        if position != index + 1 {
            bail!("slide tag {} leaves position {} empty", position, index + 1);
        }
        slides.push(build_slide(position, lines, base_dir));
    }

    Deck::new(slides)
}

fn build_slide(position: usize, lines: Vec<String>, base_dir: &Path) -> Slide {
    let mut title = None;
    let mut heading_seen = false;
    let mut image = None;
    let mut body = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        // Only the first heading is the title, even when it is blank
        if !heading_seen {
            if let Some(heading) = trimmed.strip_prefix('#').filter(|h| h.is_empty() || h.starts_with(' ')) {
                heading_seen = true;
                let heading = heading.trim();
                if !heading.is_empty() {
                    title = Some(heading.to_string());
                }
                continue;
            }
        }
        if let Some(path) = parse_image_line(trimmed) {
            if image.is_none() {
                image = Some(base_dir.join(path));
            }
            continue;
        }
        body.push(line.trim_end().to_string());
    }

    while body.first().is_some_and(|l| l.trim().is_empty()) {
        body.remove(0);
    }
    while body.last().is_some_and(|l| l.trim().is_empty()) {
        body.pop();
    }

    Slide { position, title, body, image }
}

// `![alt](path)`
fn parse_image_line(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("![")?;
    let (_, rest) = rest.split_once("](")?;
    let path = rest.strip_suffix(')')?.trim();
    if path.is_empty() { None } else { Some(path) }
}

pub fn load_deck(path: &Path) -> Result<Deck> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read deck {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    parse_deck(&source, base_dir).with_context(|| format!("invalid deck {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn parse(source: &str) -> Result<Deck> {
        parse_deck(source, Path::new("/decks"))
    }

    #[test]
    fn untagged_separators_number_slides_in_order() {
        let deck = parse("---\n# One\n---\n# Two\n---\nplain").expect("parse failed");
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.get(1).and_then(|s| s.title.as_deref()), Some("One"));
        assert_eq!(deck.get(2).and_then(|s| s.title.as_deref()), Some("Two"));
        assert_eq!(deck.get(3).and_then(|s| s.title.as_deref()), None);
        assert_eq!(deck.get(3).map(|s| s.body.clone()), Some(vec!["plain".to_string()]));
    }

    #[test]
    fn tags_reorder_slides() {
        let deck = parse("--- 2\n# Second\n--- 1\n# First").expect("parse failed");
        assert_eq!(deck.get(1).and_then(|s| s.title.as_deref()), Some("First"));
        assert_eq!(deck.get(2).and_then(|s| s.title.as_deref()), Some("Second"));
    }

    #[test]
    fn preamble_before_first_separator_is_ignored() {
        let deck = parse("notes for the speaker\n---\n# Only").expect("parse failed");
        assert_eq!(deck.len(), 1);
        assert!(deck.get(1).is_some_and(|s| s.body.is_empty()));
    }

    #[test]
    fn title_image_and_body_are_split() {
        let deck = parse("---\n\n# Title\nfirst\n![chart](img/chart.png)\n\nsecond\n\n").expect("parse failed");
        let slide = deck.get(1).expect("missing slide");
        assert_eq!(slide.title.as_deref(), Some("Title"));
        assert_eq!(slide.image, Some(PathBuf::from("/decks/img/chart.png")));
        assert_eq!(slide.body, vec!["first", "", "second"]);
    }

    #[test]
    fn display_title_falls_back_to_position() {
        let deck = parse("---\n# Named\n---\nbody").expect("parse failed");
        assert_eq!(deck.get(1).map(Slide::display_title).as_deref(), Some("Named"));
        assert_eq!(deck.get(2).map(Slide::display_title).as_deref(), Some("Slide 2"));
    }

    #[test]
    fn empty_heading_is_not_a_title() {
        let deck = parse("---\n#  \nbody").expect("parse failed");
        assert_eq!(deck.get(1).and_then(|s| s.title.clone()), None);
    }

    #[test]
    fn blank_first_heading_uses_up_the_title() {
        let deck = parse("---\n#  \n# Later\nbody").expect("parse failed");
        let slide = deck.get(1).expect("missing slide");
        assert_eq!(slide.title, None);
        assert_eq!(slide.body, vec!["# Later", "body"]);
    }

    #[test]
    fn oversized_tag_is_rejected_by_name() {
        let err = parse("--- 18446744073709551615\n---\n").unwrap_err();
        assert!(err.to_string().contains("slide tag 18446744073709551615 is out of range"));

        let err = parse("--- 3\n---").unwrap_err();
        assert!(err.to_string().contains("slide tag 3 is out of range"));
    }

    #[test]
    fn empty_deck_is_rejected() {
        let err = parse("just a preamble").unwrap_err();
        assert!(err.to_string().contains("no slides"));
    }

    #[test]
    fn duplicate_tags_are_rejected() {
        let err = parse("--- 1\n--- 1").unwrap_err();
        assert!(err.to_string().contains("duplicate slide tag 1"));
    }

    #[test]
    fn gaps_in_tags_are_rejected() {
        let err = parse("--- 1\n--- 3").unwrap_err();
        assert!(err.to_string().contains("tag 3"));
    }

    #[test]
    fn zero_and_garbage_tags_are_rejected() {
        assert!(parse("--- 0").is_err());
        assert!(parse("--- two").is_err());
    }

    #[test]
    fn positions_out_of_range_are_absent() {
        let deck = parse("---\n---").expect("parse failed");
        assert!(deck.get(0).is_none());
        assert!(deck.get(3).is_none());
    }

    #[test]
    fn load_deck_resolves_images_next_to_the_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("talk.deck");
        let mut file = fs::File::create(&path).expect("failed to create deck");
        file.write_all(b"---\n# Hello\n![logo](logo.png)\n")
            .expect("failed to write deck");

        let deck = load_deck(&path).expect("load failed");
        assert_eq!(deck.get(1).and_then(|s| s.image.clone()), Some(dir.path().join("logo.png")));
    }

    #[test]
    fn load_deck_reports_missing_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load_deck(&dir.path().join("missing.deck")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read deck"));
    }
}
