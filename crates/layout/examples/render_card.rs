use chrono::Local;
use layout::{download_file_name, render_pdf, CardLayout, CardMode, CardRequest};
use std::fs;

fn main() {
    let mode = match std::env::args().nth(1).as_deref() {
        Some("human_touch") => CardMode::HumanTouch,
        _ => CardMode::Demo,
    };

    let request = CardRequest {
        poem: [
            "Dear Ava,",
            "",
            "As you rest and recover, remember:",
            "",
            "I am sending you soup and bad jokes.",
            "",
            "You are my sister to me,",
            "and I don’t say that lightly.",
            "",
            "May peace meet you, little by little.",
            "",
            "— With Love",
            "Sam",
        ]
        .join("\n"),
        recipient_name: "Ava".into(),
        occasion: Some("Get Well".into()),
        relationship: "my sister".into(),
        mode,
    };

    let layout = CardLayout::build(&request, Local::now().date_naive());
    let bytes = render_pdf(&layout).expect("render card");
    let path = download_file_name(&request.recipient_name);
    fs::write(&path, &bytes).expect("write pdf");
    println!("wrote {path} ({} bytes, {mode:?})", bytes.len());
}
