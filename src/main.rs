use std::error::Error;
use std::fs;

use carecards::{
    create_card, CardMode, Occasion, RandomPicker, RawGenerationRequest, Signature, Tone,
};
use chrono::Local;

fn main() -> Result<(), Box<dyn Error>> {
    let output_dir = std::env::args().nth(1);

    let raw = RawGenerationRequest {
        recipient_name: Some("Maya".into()),
        relationship: Some("my best friend".into()),
        occasion: Some(Occasion::ThinkingOfYou),
        tone: Some(Tone::Warm),
        message_intent: Some("I have been thinking about our long walks".into()),
        meaning: Some("You make ordinary days feel lighter".into()),
        sender_name: Some("Jordan".into()),
        signature: Some(Signature::WithCare),
    };

    let (poem, card) = create_card(
        raw,
        CardMode::Demo,
        Local::now().date_naive(),
        &mut RandomPicker::new(),
    )?;

    println!("{poem}");
    println!();

    match output_dir {
        Some(dir) => {
            let path = std::path::Path::new(&dir).join(&card.file_name);
            fs::write(&path, &card.pdf)?;
            println!("wrote {} ({} bytes)", path.display(), card.pdf.len());
        }
        None => println!(
            "rendered {} ({} bytes); pass a directory to save it",
            card.file_name,
            card.pdf.len()
        ),
    }

    Ok(())
}
