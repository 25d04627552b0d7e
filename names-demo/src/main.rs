use std::path::PathBuf;

use clap::Parser;
use names_core::{ArchetypeCatalog, Corpus, GeneratorConfig, NameGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "names-demo", about = "Generate character names per archetype", version)]
struct Cli {
    /// Archetype to generate for (default: every archetype)
    #[arg(short, long)]
    archetype: Option<String>,

    /// Number of names per archetype
    #[arg(short, long, default_value_t = 3)]
    count: usize,

    /// RNG seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Append a surname to each first name
    #[arg(short, long)]
    full: bool,

    /// Folder of extra `.dat` corpora (one name per line)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Context width of the transition model
    #[arg(short, long, default_value_t = 1)]
    order: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // Built-in archetypes, plus any corpora found in --data
    let mut catalog = ArchetypeCatalog::default();
    if let Some(dir) = &cli.data {
        let added = catalog.load_dir(dir)?;
        log::info!("loaded {added} extra archetypes from {}", dir.display());
    }

    let config = GeneratorConfig::default().with_order(cli.order);
    let generator = NameGenerator::new(catalog, Corpus::from_static(names_core::corpus::SURNAMES), config);

    // A fixed seed gives the same names on every run
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let archetypes: Vec<String> = match &cli.archetype {
        Some(a) => vec![a.clone()],
        None => generator.catalog().labels().map(str::to_owned).collect(),
    };

    for archetype in &archetypes {
        if generator.catalog().get(archetype).is_none() {
            log::warn!("'{archetype}' is not a known archetype, using the default corpus");
        }
        println!("\nSuggested names for {archetype}:");
        let names = if cli.full {
            generator.suggest_names(archetype, cli.count, &mut rng)
        } else {
            generator
                .generate_for_archetype_with(archetype, cli.count, &Default::default(), &mut rng)
                .into_iter()
                .enumerate()
                .map(|(i, name)| format!("{}. {}", i + 1, name))
                .collect()
        };
        for line in names {
            println!("{line}");
        }
    }

    Ok(())
}
