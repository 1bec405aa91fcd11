#[macro_use]
extern crate clap;

use std::error::Error;
use std::time::Instant;

use clap::{App, ArgMatches};
use dialoguer::{Input, Select};
use dialoguer::console::{Emoji, style};
use dialoguer::theme::ColorfulTheme;

use crop_yield_predictor::artifacts::{ArtifactPaths, Artifacts};
use crop_yield_predictor::cli::{self, CliError};
use crop_yield_predictor::inference::Predictor;
use crop_yield_predictor::model::Regressor;
use crop_yield_predictor::shared_interface::{
    DEFAULT_AVG_TEMP, DEFAULT_PESTICIDES, DEFAULT_RAINFALL, DEFAULT_YEAR, MAX_YEAR, MIN_YEAR, PredictionRequest,
};
use crop_yield_predictor::vocabulary::{self, AREAS, ITEMS};

static LOADING: Emoji<'_, '_> = Emoji("⏳ ", "");
static CROP: Emoji<'_, '_> = Emoji("🌾 ", "");
static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

#[derive(Debug)]
enum Mode {
    ListAreas,
    ListItems,
    Check,
    Interactive,
    Flags(PredictionRequest),
}

#[derive(Debug)]
struct Opts {
    paths: ArtifactPaths,
    mode: Mode,
    quiet: bool,
}

fn parse_paths(m: &ArgMatches) -> Result<ArtifactPaths, CliError> {
    let dir = cli::parse_input_dir(m.value_of("artifacts").unwrap_or("."))?;
    let mut paths = ArtifactPaths::in_dir(dir);

    if let Some(file) = m.value_of("encoders") { paths.encoders = cli::parse_input_file(file)?; }
    if let Some(file) = m.value_of("scaler") { paths.scaler = cli::parse_input_file(file)?; }
    if let Some(file) = m.value_of("model") { paths.model = cli::parse_input_file(file)?; }

    Ok(paths)
}

fn parse_request(m: &ArgMatches) -> Result<PredictionRequest, CliError> {
    let area = m.value_of("area").ok_or_else(|| CliError::MissingInputArg("area".to_string()))?;
    let item = m.value_of("item").ok_or_else(|| CliError::MissingInputArg("item".to_string()))?;

    let year = match m.value_of("year") {
        Some(input) => cli::parse_year(input, MIN_YEAR, MAX_YEAR)?,
        None => DEFAULT_YEAR,
    };
    let rainfall = if m.is_present("rainfall") { value_t_or_exit!(m, "rainfall", f64) } else { DEFAULT_RAINFALL };
    let pesticides = if m.is_present("pesticides") { value_t_or_exit!(m, "pesticides", f64) } else { DEFAULT_PESTICIDES };
    let avg_temp = if m.is_present("avg_temp") { value_t_or_exit!(m, "avg_temp", f64) } else { DEFAULT_AVG_TEMP };

    Ok(PredictionRequest::new(area, item, year, rainfall, pesticides, avg_temp))
}

fn parse_opts() -> Result<Opts, CliError> {
    let yml = load_yaml!("cli_args.yaml");
    let m = App::from_yaml(yml).get_matches();

    let mode = if m.is_present("list_areas") {
        Mode::ListAreas
    } else if m.is_present("list_items") {
        Mode::ListItems
    } else if m.is_present("check") {
        Mode::Check
    } else if m.is_present("area") || m.is_present("item") {
        Mode::Flags(parse_request(&m)?)
    } else {
        Mode::Interactive
    };

    Ok(Opts {
        paths: parse_paths(&m)?,
        mode,
        quiet: m.is_present("quiet"),
    })
}

/// Same fields, order and defaults as the original input form.
fn prompt_request() -> std::io::Result<PredictionRequest> {
    let theme = ColorfulTheme::default();

    let area = Select::with_theme(&theme)
        .with_prompt("Select Area")
        .items(AREAS)
        .default(0)
        .interact()?;
    let item = Select::with_theme(&theme)
        .with_prompt("Select Crop Item")
        .items(ITEMS)
        .default(0)
        .interact()?;
    let year: i32 = Input::with_theme(&theme)
        .with_prompt("Year")
        .default(DEFAULT_YEAR)
        .validate_with(|year: &i32| -> Result<(), String> {
            if *year >= MIN_YEAR && *year <= MAX_YEAR { Ok(()) } else { Err(format!("Year must be between {} and {}", MIN_YEAR, MAX_YEAR)) }
        })
        .interact_text()?;
    let rainfall: f64 = Input::with_theme(&theme)
        .with_prompt("Average Rainfall (mm/year)")
        .default(DEFAULT_RAINFALL)
        .interact_text()?;
    let pesticides: f64 = Input::with_theme(&theme)
        .with_prompt("Pesticides Used (tonnes)")
        .default(DEFAULT_PESTICIDES)
        .interact_text()?;
    let avg_temp: f64 = Input::with_theme(&theme)
        .with_prompt("Average Temperature (°C)")
        .default(DEFAULT_AVG_TEMP)
        .interact_text()?;

    Ok(PredictionRequest::new(AREAS[area], ITEMS[item], year, rainfall, pesticides, avg_temp))
}

fn print_summary<M: Regressor>(artifacts: &Artifacts<M>) {
    for feature in artifacts.encoders.feature_names() {
        let n_classes = artifacts.encoders.get(feature).map_or(0, |enc| enc.len());
        println!("   Encoder {:<8} {} classes", feature, n_classes);
    }
    println!("   Scaler           {} features", artifacts.scaler.n_features());
    println!("   Model            {}", artifacts.model.describe());
}

fn run(opts: Opts) -> Result<bool, Box<dyn Error>> {
    match opts.mode {
        Mode::ListAreas => {
            AREAS.iter().for_each(|area| println!("{}", area));
            return Ok(true);
        }
        Mode::ListItems => {
            ITEMS.iter().for_each(|item| println!("{}", item));
            return Ok(true);
        }
        _ => {}
    }

    cli::print_output(format!("\n{}   {}Loading artifacts...\n", style("[1/2]").bold().dim(), LOADING), opts.quiet);
    let start = Instant::now();

    let artifacts = Artifacts::load(&opts.paths)?;
    artifacts.check_schema()?;
    log::info!("Artifacts loaded in {:.1?}", start.elapsed());

    if let Mode::Check = opts.mode {
        print_summary(&artifacts);
        return Ok(true);
    }

    let predictor = Predictor::new(artifacts);

    let request = match opts.mode {
        Mode::Flags(request) => request,
        _ => {
            cli::print_output(format!("\n{}Crop Yield Prediction App\n", CROP), opts.quiet);
            cli::print_output("Fill in the details below to predict yield (hg/ha):\n\n".to_string(), opts.quiet);
            prompt_request()?
        }
    };

    cli::print_output(format!("\n{}   {}Predicting...\n\n", style("[2/2]").bold().dim(), SPARKLE), opts.quiet);

    // Input surface gate first, then the encoders' own vocabulary
    let outcome = vocabulary::check_request(&request).and_then(|_| predictor.predict(&request));
    println!("{}", cli::render_outcome(&outcome));

    Ok(outcome.is_ok())
}

fn main() {
    env_logger::init();

    let opts = parse_opts().unwrap_or_else(|e| cli::exit_with_error(Box::new(e)));

    match run(opts) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => cli::exit_with_error(e),
    }
}
