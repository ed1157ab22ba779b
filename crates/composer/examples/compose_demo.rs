use composer::{compose, GenerationRequest, Occasion, SeededPicker, Signature, Tone};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);

    let request = GenerationRequest {
        recipient_name: "Maya".into(),
        relationship: "my best friend".into(),
        occasion: Occasion::GetWell,
        tone: Tone::Comforting,
        message_intent: "I am sending you soup and bad jokes".into(),
        meaning: Some("You are the first person I call with good news".into()),
        sender_name: Some("Jordan".into()),
        signature: Some(Signature::WithLove),
    };

    let poem = compose(&request, &mut SeededPicker::new(seed));
    println!("seed: {seed}");
    println!();
    println!("{poem}");
}
