use verse_gen_core::model::generation_input::GenerationInput;
use verse_gen_core::model::generator::Generator;
use verse_gen_core::model::random::{SeededRandom, ThreadRandom};

const CORPUS: &str = "\
The moon rises over a silver lake. Night winds whisper through the reeds! \
A heron waits, patient and pale. The water holds every star. \
Morning comes slowly; the mist burns away. Who counts the hours here? \
The heron lifts, the lake forgets. Stones remember what the water said.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Train a model from an in-memory corpus
    // (Generator::new("./data/corpus.txt") would load a file and cache
    // the trained model next to it)
    let app = Generator::from_text(CORPUS);

    // Default bounds: 3 to 5 base lines, capped at 20 lines total
    let mut input = GenerationInput::default();

    // Allow a wider line range
    input.set_lines_per_word(2, 6)?;
    input.set_max_total_lines(12)?;

    // Attempting to set an impossible range
    match input.set_lines_per_word(4, 2) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("A 4..2 line range is invalid"),
    }

    // Attempting to remove the line ceiling entirely
    match input.set_max_total_lines(0) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("A ceiling of 0 lines is invalid"),
    }

    // Words the model considers close to a prompt, best first
    println!("Relevant to 'moonlight': {:?}", app.relevant_words("moonlight"));

    // Generate a few poems with real randomness
    let mut rng = ThreadRandom;
    for i in 0..3 {
        println!("--- poem {} ---", i + 1);
        println!("{}", app.generate("moonlight over the water", &input, &mut rng)?);
    }

    // A seeded source makes generation reproducible
    let mut first = SeededRandom::new(42);
    let mut second = SeededRandom::new(42);
    let one = app.generate("winter night", &input, &mut first)?;
    let two = app.generate("winter night", &input, &mut second)?;
    assert_eq!(one, two);
    println!("Seeded generations are identical");

    Ok(())
}
