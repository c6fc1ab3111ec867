//! Slide markup for Slidev.
//!
//! Every slide starts with the same frontmatter block; the presentation
//! engine treats the leading `---` line as the slide separator.

use crate::quiz_engine::models::{Document, ImageUnit, Item, Show, SlidePair, TextUnit, Unit};

const SLIDE_HEADER: &str = "---\nlayout: center\nclass: text-center\n---\n\n";
const GROUP_OPEN: &str = "<div class=\"flex items-center justify-center flex-wrap gap-6\">";
const DEFAULT_ALT: &str = "logo";

/// Prompt slides show units large; reveal slides repeat them smaller and
/// dimmed under the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Prompt,
    Reveal,
}

impl Scale {
    fn image_class(self) -> &'static str {
        match self {
            Scale::Prompt => "w-64",
            Scale::Reveal => "w-44 mt-6 opacity-85",
        }
    }

    fn text_class(self) -> &'static str {
        match self {
            Scale::Prompt => "text-6xl",
            Scale::Reveal => "text-4xl mt-6 opacity-85",
        }
    }
}

/// Escape `&`, `<` and `>` so author text never becomes markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_image(img: &ImageUnit, scale: Scale) -> String {
    let class = img.size_class.as_deref().unwrap_or(scale.image_class());
    let alt = img.alt.as_deref().unwrap_or(DEFAULT_ALT);
    format!(
        "<img src=\"{}\" alt=\"{}\" class=\"{class} h-auto mx-auto\" />",
        escape_html(&img.src),
        escape_html(alt),
    )
}

fn render_text(text: &TextUnit, scale: Scale) -> String {
    format!("<div class=\"{} font-bold\">{}</div>", scale.text_class(), escape_html(&text.text))
}

/// Markup for one unit at the given scale.
pub fn render_unit(unit: &Unit, scale: Scale) -> String {
    match unit {
        Unit::Image(img) => render_image(img, scale),
        Unit::Text(text) => render_text(text, scale),
    }
}

fn render_show(show: &Show, scale: Scale) -> String {
    match show {
        Show::Single(unit) => render_unit(unit, scale),
        Show::Group(units) => {
            let inner: Vec<String> = units.iter().map(|u| render_unit(u, scale)).collect();
            format!("{GROUP_OPEN}\n{}\n</div>", inner.join("\n"))
        }
    }
}

/// Prompt and reveal bodies for one item, without slide headers.
pub fn render_item(item: &Item) -> SlidePair {
    SlidePair {
        prompt: render_show(&item.show, Scale::Prompt),
        reveal: render_show(&item.show, Scale::Reveal),
    }
}

/// Both slides for one item: the prompt without the answer, then the reveal
/// with the answer as heading.
pub fn render_slide_pair(item: &Item) -> String {
    let SlidePair { prompt, reveal } = render_item(item);
    let first = format!("{SLIDE_HEADER}{prompt}\n");
    let second = format!("{SLIDE_HEADER}# {}\n\n{reveal}\n", escape_html(&item.answer));
    format!("{first}\n{second}\n")
}

/// Centered title slide, or an empty string when there is no title.
pub fn render_title_slide(title: Option<&str>) -> String {
    match title {
        Some(t) if !t.is_empty() => format!("{SLIDE_HEADER}# {}\n", escape_html(t)),
        _ => String::new(),
    }
}

/// Placeholder written whenever generation fails, so the deck still builds.
pub fn render_fallback(message: &str) -> Document {
    Document(format!(
        "{SLIDE_HEADER}# Quiz not ready\n\nUpdate quiz.json and re-run.\n\n<small>{}</small>\n",
        escape_html(message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_item(text: &str, answer: &str) -> Item {
        Item {
            answer: answer.into(),
            show: Show::Single(Unit::Text(TextUnit { text: text.into() })),
        }
    }

    fn image(src: &str) -> Unit {
        Unit::Image(ImageUnit { src: src.into(), alt: None, size_class: None })
    }

    #[test]
    fn escapes_the_three_markup_characters() {
        assert_eq!(escape_html("a & <b> c"), "a &amp; &lt;b&gt; c");
        assert_eq!(escape_html("plain \"quoted\""), "plain \"quoted\"");
    }

    #[test]
    fn image_defaults_depend_on_scale() {
        let unit = image("rust.png");
        assert_eq!(
            render_unit(&unit, Scale::Prompt),
            "<img src=\"rust.png\" alt=\"logo\" class=\"w-64 h-auto mx-auto\" />"
        );
        assert_eq!(
            render_unit(&unit, Scale::Reveal),
            "<img src=\"rust.png\" alt=\"logo\" class=\"w-44 mt-6 opacity-85 h-auto mx-auto\" />"
        );
    }

    #[test]
    fn size_class_overrides_both_scales() {
        let unit = Unit::Image(ImageUnit {
            src: "go.svg".into(),
            alt: Some("Go".into()),
            size_class: Some("w-20".into()),
        });
        for scale in [Scale::Prompt, Scale::Reveal] {
            assert_eq!(
                render_unit(&unit, scale),
                "<img src=\"go.svg\" alt=\"Go\" class=\"w-20 h-auto mx-auto\" />"
            );
        }
    }

    #[test]
    fn text_scales_and_escapes() {
        let item = text_item("<b>hi</b>", "x");
        let pair = render_item(&item);
        assert_eq!(pair.prompt, "<div class=\"text-6xl font-bold\">&lt;b&gt;hi&lt;/b&gt;</div>");
        assert_eq!(
            pair.reveal,
            "<div class=\"text-4xl mt-6 opacity-85 font-bold\">&lt;b&gt;hi&lt;/b&gt;</div>"
        );
    }

    #[test]
    fn slide_pair_hides_answer_on_prompt() {
        let out = render_slide_pair(&text_item("A", "Alpha & Omega"));
        let expected = "---\nlayout: center\nclass: text-center\n---\n\n\
                        <div class=\"text-6xl font-bold\">A</div>\n\
                        \n\
                        ---\nlayout: center\nclass: text-center\n---\n\n\
                        # Alpha &amp; Omega\n\n\
                        <div class=\"text-4xl mt-6 opacity-85 font-bold\">A</div>\n\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn group_units_share_one_container_in_order() {
        let item = Item {
            answer: "Pair".into(),
            show: Show::Group(vec![image("a.png"), image("b.png")]),
        };
        let pair = render_item(&item);
        for body in [&pair.prompt, &pair.reveal] {
            assert!(body.starts_with(GROUP_OPEN));
            assert!(body.ends_with("\n</div>"));
            assert_eq!(body.matches("<img").count(), 2);
            assert!(body.find("a.png").unwrap() < body.find("b.png").unwrap());
        }
    }

    #[test]
    fn title_slide_is_optional() {
        assert_eq!(render_title_slide(None), "");
        assert_eq!(render_title_slide(Some("")), "");
        assert_eq!(
            render_title_slide(Some("Logos <2024>")),
            "---\nlayout: center\nclass: text-center\n---\n\n# Logos &lt;2024&gt;\n"
        );
    }

    #[test]
    fn fallback_carries_the_message() {
        let doc = render_fallback("items[2] must have an \"answer\"");
        assert!(doc.as_str().starts_with(SLIDE_HEADER));
        assert!(doc.as_str().contains("# Quiz not ready"));
        assert!(doc.as_str().contains("<small>items[2] must have an \"answer\"</small>"));
    }
}
