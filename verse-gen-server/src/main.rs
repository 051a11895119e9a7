use std::env;

use actix_cors::Cors;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};

use serde::{Deserialize, Serialize};
use verse_gen_core::model::generation_input::GenerationInput;
use verse_gen_core::model::generator::Generator;
use verse_gen_core::model::random::ThreadRandom;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	prompt: String,
	min_lines_per_word: Option<usize>,
	max_lines_per_word: Option<usize>,
	max_total_lines: Option<usize>,
}

#[derive(Deserialize)]
struct RelevantParams {
	prompt: String,
}

/// Model facts reported by `/v1/model`.
#[derive(Serialize)]
struct ModelInfo {
	name: String,
	known_words: usize,
	start_words: usize,
}

impl GenerateParams {
	/// Builds validated generation bounds from the query, falling back to
	/// the documented defaults for missing parameters.
	fn generation_input(&self) -> Result<GenerationInput, String> {
		let defaults = GenerationInput::default();
		GenerationInput::new(
			self.min_lines_per_word.unwrap_or(defaults.min_lines_per_word()),
			self.max_lines_per_word.unwrap_or(defaults.max_lines_per_word()),
			self.max_total_lines.unwrap_or(defaults.max_total_lines()),
		)
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates a poem steered toward the prompt. Returns the generated
/// lines as the response body; an untrained model yields an empty body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Generator>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.generation_input() {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	// The model is never mutated after training, so concurrent requests
	// read it without locking; randomness is request-local
	let mut rng = ThreadRandom;
	match data.generate(&query.prompt, &input, &mut rng) {
		Ok(poem) => HttpResponse::Ok().body(poem),
		Err(e) => HttpResponse::InternalServerError().body(e),
	}
}

/// HTTP GET endpoint `/v1/relevant`
///
/// Returns the known words ranked by similarity to the prompt, one per
/// line, best first.
#[get("/v1/relevant")]
async fn get_relevant(data: web::Data<Generator>, query: web::Query<RelevantParams>) -> impl Responder {
	HttpResponse::Ok().body(data.relevant_words(&query.prompt).join("\n"))
}

/// HTTP GET endpoint `/v1/model`
///
/// Reports the loaded model: corpus name, known-word and start-word
/// counts.
#[get("/v1/model")]
async fn get_model(data: web::Data<Generator>) -> impl Responder {
	HttpResponse::Ok().json(ModelInfo {
		name: data.name().to_owned(),
		known_words: data.chain().len(),
		start_words: data.chain().start_words().len(),
	})
}

/// Main entry point for the server.
///
/// Trains the model from the corpus file once (or loads its binary
/// cache), then starts an Actix-web HTTP server sharing the model
/// read-only across workers.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - The corpus path is the first argument, defaulting to
///   `./data/corpus.txt`.
/// - CORS is permissive: the expected consumer is a browser front end.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let corpus_path = env::args().nth(1).unwrap_or_else(|| "./data/corpus.txt".to_owned());
	let generator = match Generator::new(&corpus_path) {
		Ok(generator) => generator,
		Err(e) => {
			log::error!("failed to load corpus {}: {}", corpus_path, e);
			return Err(std::io::Error::other(e.to_string()));
		}
	};
	log::info!(
		"model '{}' ready: {} known words, {} start words",
		generator.name(),
		generator.chain().len(),
		generator.chain().start_words().len()
	);

	let shared_model = web::Data::new(generator);

	HttpServer::new(move || {
		App::new()
			.app_data(shared_model.clone())
			.wrap(Cors::permissive())
			.wrap(middleware::Logger::default())
			.service(get_generated)
			.service(get_relevant)
			.service(get_model)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
