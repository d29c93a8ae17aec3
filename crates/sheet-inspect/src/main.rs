use anyhow::{Context, Result};
use clap::Parser;
use sample_map_shared::atlas::{Atlas, Selection};
use sample_map_shared::error::LoadError;
use sample_map_shared::models::Cluster;
use sample_map_shared::sheet::{SheetFormat, DEFAULT_SHEET_URL};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Fetch the published sample sheet and report how it will render on the map.
#[derive(Parser, Debug)]
#[command(name = "sheet-inspect", version)]
struct Args {
    /// Sheet export URL.
    #[arg(long, env = "SAMPLE_SHEET_URL", default_value = DEFAULT_SHEET_URL)]
    url: String,

    /// Column delimiter: `tab`, `comma`, or a single character.
    #[arg(long, short, default_value = "tab", value_parser = parse_delimiter)]
    delimiter: char,

    /// Run a search-box query and show what each hit resolves to.
    #[arg(long)]
    search: Option<String>,

    /// Print the clusters as JSON instead of the text summary.
    #[arg(long)]
    json: bool,

    /// How many of the largest clusters to list.
    #[arg(long, default_value_t = 5)]
    top: usize,
}

fn parse_delimiter(raw: &str) -> Result<char, String> {
    match raw {
        "tab" | "\\t" => Ok('\t'),
        "comma" => Ok(','),
        "semicolon" => Ok(';'),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(format!("expected tab, comma, semicolon or one character, got {other:?}")),
            }
        }
    }
}

fn fetch_sheet(client: &reqwest::blocking::Client, url: &str) -> Result<String, LoadError> {
    tracing::info!(%url, "Fetching sheet");
    let resp = client
        .get(url)
        .send()
        .map_err(|e| LoadError::Network(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(LoadError::Status(resp.status().as_u16()));
    }
    resp.text().map_err(|e| LoadError::Network(e.to_string()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClusterReport<'a> {
    key: &'a str,
    lat: f64,
    lng: f64,
    samples: usize,
    records: &'a [sample_map_shared::models::Record],
}

fn clusters_json(atlas: &Atlas<()>) -> serde_json::Result<String> {
    let report: Vec<ClusterReport<'_>> = atlas
        .registry()
        .entries()
        .map(|e| ClusterReport {
            key: e.cluster.key.as_str(),
            lat: e.cluster.coord.lat,
            lng: e.cluster.coord.lng,
            samples: e.cluster.len(),
            records: &e.cluster.records,
        })
        .collect();
    serde_json::to_string_pretty(&report)
}

fn format_summary(atlas: &Atlas<()>, top: usize) -> String {
    let total = atlas.records().len();
    let placed: usize = atlas.registry().entries().map(|e| e.cluster.len()).sum();

    let mut out = String::new();
    out.push_str("=== Sheet ===\n");
    out.push_str(&format!("  Records:   {}\n", total));
    out.push_str(&format!("  On map:    {}\n", placed));
    out.push_str(&format!("  Dropped:   {}\n", total - placed));
    out.push_str(&format!("  Markers:   {}\n", atlas.registry().len()));

    if let Some(b) = atlas.registry().bounds() {
        out.push_str(&format!(
            "  Bounds:    {},{} .. {},{}\n",
            b.south_west.lat, b.south_west.lng, b.north_east.lat, b.north_east.lng
        ));
    }

    let mut largest: Vec<&Cluster> = atlas.registry().entries().map(|e| &e.cluster).collect();
    // stable sort keeps first-seen order among equal sizes
    largest.sort_by(|a, b| b.len().cmp(&a.len()));
    if top > 0 && !largest.is_empty() {
        out.push_str("\n=== Largest clusters ===\n");
        for c in largest.into_iter().take(top) {
            out.push_str(&format!("  {}: {} samples\n", c.key, c.len()));
        }
    }

    let dropped: Vec<(usize, &str)> = atlas
        .records()
        .iter()
        .filter(|r| r.coord().is_none())
        .map(|r| (r.line(), r.get("o").unwrap_or("")))
        .collect();
    if !dropped.is_empty() {
        out.push_str("\n=== Rows without valid coordinates ===\n");
        for (line, name) in dropped {
            out.push_str(&format!("  line {}: {}\n", line, name));
        }
    }

    out
}

fn format_search(atlas: &mut Atlas<()>, query: &str) -> String {
    let outcome = atlas.search(query);
    if !outcome.shows_panel() {
        return format!("No results for {query:?}\n");
    }
    let hits: Vec<(usize, String)> = atlas
        .hits(&outcome)
        .map(|(i, r)| (i, r.get("o").unwrap_or("").to_string()))
        .collect();

    let mut out = format!("=== {} result(s) for {:?} ===\n", hits.len(), query);
    for (i, name) in hits {
        let target = match atlas.select_result(i) {
            Selection::Show { key, .. } => format!("marker {key}"),
            Selection::Miss => "no marker".to_string(),
        };
        out.push_str(&format!("  {name} -> {target}\n"));
    }
    atlas.close_popup();
    out
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let format = SheetFormat {
        delimiter: args.delimiter,
        ..SheetFormat::default()
    };

    let client = reqwest::blocking::Client::new();
    let text = fetch_sheet(&client, &args.url).with_context(|| format!("loading {}", args.url))?;
    let mut atlas = Atlas::load(&text, format, |_| ()).context("parsing sheet")?;

    if args.json {
        println!("{}", clusters_json(&atlas)?);
        return Ok(());
    }

    print!("{}", format_summary(&atlas, args.top));
    if let Some(query) = args.search.as_deref() {
        println!();
        print!("{}", format_search(&mut atlas, query));
    }
    Ok(())
}
