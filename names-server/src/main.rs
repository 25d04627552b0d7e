use std::env;

use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use names_core::{designation, ArchetypeCatalog, Corpus, GeneratorConfig, NameError, NameGenerator, NameOptions, MAX_NAME_LENGTH};

/// Environment variable naming an optional folder of extra `.dat` corpora.
const DATA_DIR_VAR: &str = "NAMES_DATA_DIR";

/// Largest `count` accepted by `/v1/generate`.
const MAX_COUNT: usize = 100;

/// Rejects length parameters beyond what the generator can produce.
fn check_lengths(options: &NameOptions) -> Result<(), HttpResponse> {
	let too_long = [options.min_length, options.max_length]
		.into_iter()
		.flatten()
		.any(|len| len > MAX_NAME_LENGTH);
	if too_long {
		return Err(HttpResponse::BadRequest().body(format!("lengths must be <= {MAX_NAME_LENGTH}")));
	}
	Ok(())
}

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	archetype: Option<String>,
	count: Option<usize>,
	min_length: Option<usize>,
	max_length: Option<usize>,
	order: Option<usize>,
	full: Option<bool>
}

impl GenerateParams {
	fn options(&self) -> NameOptions {
		NameOptions { min_length: self.min_length, max_length: self.max_length, order: self.order }
	}
}

struct SharedData {
	generator: NameGenerator
}

#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let archetype = query.archetype.as_deref().unwrap_or("aristocrat");
	let count = query.count.unwrap_or(1);
	if count > MAX_COUNT {
		return HttpResponse::BadRequest().body(format!("count must be <= {MAX_COUNT}"));
	}

	let options = query.options();
	if let Err(resp) = check_lengths(&options) {
		return resp;
	}

	let generator = &data.generator;
	let mut rng = rand::rng();

	// Strict lookup: a typo is reported instead of silently aliased
	let result = if query.full.unwrap_or(false) {
		generator.try_generate_full_name(archetype, count, &options, &mut rng)
	} else {
		generator.try_generate_for_archetype(archetype, count, &options, &mut rng)
	};
	let body = match result {
		Ok(names) => names,
		Err(e @ NameError::UnknownArchetype(_)) => return HttpResponse::BadRequest().body(e.to_string()),
		Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
	};

	log::debug!("generated {} '{}' names", body.len(), archetype);
	HttpResponse::Ok().body(body.join("\n"))
}

#[get("/v1/surname")]
async fn get_surname(data: web::Data<SharedData>, query: web::Query<NameOptions>) -> impl Responder {
	if let Err(resp) = check_lengths(&query) {
		return resp;
	}
	HttpResponse::Ok().body(data.generator.generate_surname_with(&query, &mut rand::rng()))
}

#[get("/v1/code")]
async fn get_code() -> impl Responder {
	HttpResponse::Ok().body(designation::generate_code())
}

#[get("/v1/archetypes")]
async fn get_archetypes(data: web::Data<SharedData>) -> impl Responder {
	let labels: Vec<&str> = data.generator.catalog().labels().collect();
	HttpResponse::Ok().body(labels.join("\n"))
}

/// Builds the generator: built-in archetypes plus the corpora found in
/// `NAMES_DATA_DIR`, when set.
fn load_generator() -> Result<NameGenerator, NameError> {
	let mut catalog = ArchetypeCatalog::default();
	if let Ok(dir) = env::var(DATA_DIR_VAR) {
		let added = catalog.load_dir(&dir)?;
		log::info!("loaded {} archetypes from {}", added, dir);
	}
	Ok(NameGenerator::new(catalog, Corpus::from_static(names_core::corpus::SURNAMES), GeneratorConfig::default()))
}

/// Main entry point for the server.
///
/// Builds the name generator once and shares it read-only between
/// workers; every request builds its own transition model.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Log level is controlled by `RUST_LOG`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let generator = load_generator().map_err(std::io::Error::other)?;
	log::info!("serving {} archetypes on 127.0.0.1:5000", generator.catalog().len());
	let shared_data = web::Data::new(SharedData { generator });

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.service(get_generated)
			.service(get_surname)
			.service(get_code)
			.service(get_archetypes)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::{http::StatusCode, test};

	fn shared() -> web::Data<SharedData> {
		web::Data::new(SharedData { generator: NameGenerator::default() })
	}

	async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
		String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
	}

	#[actix_web::test]
	async fn generates_requested_count() {
		let app = test::init_service(App::new().app_data(shared()).service(get_generated)).await;
		let req = test::TestRequest::get().uri("/v1/generate?archetype=pilot&count=4&full=true").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);

		let text = body_text(resp).await;
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 4);
		assert!(lines.iter().all(|l| l.split(' ').count() == 2), "{text}");
	}

	#[actix_web::test]
	async fn unknown_archetype_is_a_bad_request() {
		let app = test::init_service(App::new().app_data(shared()).service(get_generated)).await;
		let req = test::TestRequest::get().uri("/v1/generate?archetype=pirate").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn rejects_oversized_count() {
		let app = test::init_service(App::new().app_data(shared()).service(get_generated)).await;
		let req = test::TestRequest::get().uri("/v1/generate?count=1000").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn robots_stay_surname_free() {
		let app = test::init_service(App::new().app_data(shared()).service(get_generated)).await;
		let req = test::TestRequest::get().uri("/v1/generate?archetype=robot&count=3&full=true").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);

		let text = body_text(resp).await;
		assert_eq!(text.lines().count(), 3);
		assert!(text.lines().all(|l| !l.contains(' ') && designation::is_designation(l)), "{text}");
	}

	#[actix_web::test]
	async fn serves_a_surname() {
		let app = test::init_service(App::new().app_data(shared()).service(get_surname)).await;
		let req = test::TestRequest::get().uri("/v1/surname").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);

		let surname = body_text(resp).await;
		assert!((4..=8).contains(&surname.chars().count()), "{surname}");
	}

	#[actix_web::test]
	async fn rejects_oversized_lengths() {
		let app = test::init_service(
			App::new().app_data(shared()).service(get_surname).service(get_generated),
		)
		.await;

		let req = test::TestRequest::get()
			.uri("/v1/surname?min_length=20000000&max_length=20000000")
			.to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

		let req = test::TestRequest::get().uri("/v1/generate?archetype=aristocrat&max_length=65").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

		let req = test::TestRequest::get().uri("/v1/surname?max_length=64").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
	}

	#[actix_web::test]
	async fn lists_archetypes_and_codes() {
		let app = test::init_service(
			App::new().app_data(shared()).service(get_archetypes).service(get_code),
		)
		.await;

		let req = test::TestRequest::get().uri("/v1/archetypes").to_request();
		let text = body_text(test::call_service(&app, req).await).await;
		assert!(text.lines().any(|l| l == "robot"));

		let req = test::TestRequest::get().uri("/v1/code").to_request();
		let code = body_text(test::call_service(&app, req).await).await;
		assert!(designation::is_designation(&code), "{code}");
	}
}
