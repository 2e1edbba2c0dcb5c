use deckparse::{Document, Pipeline, PipelineConfig};
use proptest::prelude::*;
use serde_json::{json, Value};

fn element_strategy() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(vec!["text", "image", "shape", "chart"]),
        "[a-z ]{0,12}",
        0.0f64..=1000.0,
        0.0f64..=1000.0,
        prop::option::of(prop::sample::select(vec!["px", "pt", "in", "cm"])),
        prop::option::of(1u32..=1000),
        prop::option::of("[0-9A-F]{6}"),
        any::<bool>(),
        0.0f64..=1.0,
    )
        .prop_map(|(kind, content, x, y, unit, font_size, color, bold, opacity)| {
            let mut position = json!({"x": x, "y": y});
            if let Some(unit) = unit {
                position["unit"] = json!(unit);
            }
            let mut style = json!({"bold": bold, "opacity": opacity});
            if let Some(size) = font_size {
                style["font_size"] = json!(size);
            }
            if let Some(color) = color {
                style["color"] = json!(format!("#{color}"));
            }
            json!({"type": kind, "content": content, "position": position, "style": style})
        })
}

fn slide_strategy() -> impl Strategy<Value = Value> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,20}",
        prop::collection::vec(element_strategy(), 0..4),
    )
        .prop_map(|(title, elements)| json!({"title": title, "elements": elements}))
}

fn deck_strategy() -> impl Strategy<Value = Value> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,40}",
        prop::collection::vec(slide_strategy(), 0..5),
    )
        .prop_map(|(title, slides)| json!({"title": title, "slides": slides}))
}

proptest! {
    #[test]
    fn parse_preserves_order(deck in deck_strategy()) {
        let pipeline = Pipeline::with_default_handlers(PipelineConfig::default());
        let document = pipeline.parse(&deck.to_string()).unwrap();

        prop_assert_eq!(document.title(), deck["title"].as_str().unwrap());
        let slides = deck["slides"].as_array().unwrap();
        prop_assert_eq!(document.slides().len(), slides.len());
        for (slide, input) in document.slides().iter().zip(slides) {
            prop_assert_eq!(slide.title(), input["title"].as_str().unwrap());
            let elements = input["elements"].as_array().unwrap();
            prop_assert_eq!(slide.elements().len(), elements.len());
            for (element, input) in slide.elements().iter().zip(elements) {
                prop_assert_eq!(element.kind().as_str(), input["type"].as_str().unwrap());
                prop_assert_eq!(element.position().x(), input["position"]["x"].as_f64().unwrap());
            }
        }
    }

    #[test]
    fn encode_then_reparse_is_stable(deck in deck_strategy()) {
        let pipeline = Pipeline::with_default_handlers(PipelineConfig::default());
        let original = pipeline.parse(&deck.to_string()).unwrap();

        let encoded = original.to_value().unwrap().to_string();
        let reparsed = pipeline.parse(&encoded).unwrap();
        prop_assert_eq!(&reparsed, &original);

        let rebuilt = Document::from_value(&original.to_value().unwrap()).unwrap();
        prop_assert_eq!(rebuilt, original);
    }
}
