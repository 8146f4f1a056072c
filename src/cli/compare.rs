use clap::Args;

use crate::cli::OutputFormat;
use crate::core::comparison::ComparisonResult;
use crate::core::types::PlaylistId;
use crate::engine::heuristics;
use crate::engine::regions::{self, Region};
use crate::parsing::url::parse_playlist_url;
use crate::provider::web_handler::{ProviderError, WebHandlerProvider};
use crate::service::analysis::{analyze, selection_tracks, OverlapAnalysis};
use crate::service::compare::build_comparison;

/// How many shared tracks the text report lists before truncating
const MAX_LISTED_TRACKS: usize = 10;

#[derive(Args)]
pub struct CompareArgs {
    /// Playlist page URLs (2 to 20)
    #[arg(required = true, num_args = 2..=20)]
    pub playlist_urls: Vec<String>,

    /// Region breakdown subset: comma-separated playlist ids (p0,p1,...)
    #[arg(long, value_delimiter = ',')]
    pub subset: Vec<String>,
}

pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut refs = Vec::with_capacity(args.playlist_urls.len());
    for (index, url) in args.playlist_urls.iter().enumerate() {
        let playlist_ref = parse_playlist_url(url)
            .map_err(|e| anyhow::anyhow!("Playlist #{}: {e}", index + 1))?;
        refs.push(playlist_ref);
    }

    let provider = WebHandlerProvider::new()?;
    let rt = tokio::runtime::Runtime::new()?;
    let snapshots = rt.block_on(async {
        let mut snapshots = Vec::with_capacity(refs.len());
        for playlist_ref in &refs {
            snapshots.push(provider.fetch(playlist_ref).await?);
        }
        Ok::<_, ProviderError>(snapshots)
    })?;

    if verbose {
        for (playlist_ref, snapshot) in refs.iter().zip(&snapshots) {
            eprintln!(
                "{}/{}: \"{}\", {} tracks",
                playlist_ref.owner_login,
                playlist_ref.kind,
                snapshot.title,
                snapshot.tracks.len()
            );
        }
    }

    let result = build_comparison(&refs, &snapshots);
    let analysis = analyze(&result);

    // --subset overrides the default region breakdown
    let (subset, subset_regions) = if args.subset.is_empty() {
        (analysis.default_subset.clone(), analysis.regions.clone())
    } else {
        let requested: Vec<PlaylistId> = args.subset.iter().map(PlaylistId::new).collect();
        let clamped = heuristics::clamp_selection(&requested)
            .ok_or_else(|| anyhow::anyhow!("--subset needs at least 2 playlist ids"))?;
        let regions = regions::decompose(&clamped, &result.playlist_sets());
        (clamped, regions)
    };

    match format {
        OutputFormat::Text => print_text(&result, &analysis, &subset, &subset_regions),
        OutputFormat::Json => print_json(&result, &analysis, &subset, &subset_regions)?,
        OutputFormat::Tsv => print_tsv(&analysis),
    }

    Ok(())
}

fn print_text(
    result: &ComparisonResult,
    analysis: &OverlapAnalysis,
    subset: &[PlaylistId],
    subset_regions: &[Region],
) {
    println!("Playlist Overlap");
    println!("{}", "=".repeat(60));

    println!("\nPlaylists:");
    for playlist in &result.playlists {
        println!(
            "  {}  \"{}\" ({}) — {} tracks",
            playlist.id, playlist.title, playlist.owner, playlist.count
        );
    }

    println!("\nSimilarity Matrix (Jaccard %):");
    print!("  {:8}", "");
    for playlist in &result.playlists {
        print!("  {:>8}", playlist.id.to_string());
    }
    println!();
    for (row_index, playlist) in result.playlists.iter().enumerate() {
        print!("  {:8}", playlist.id.to_string());
        for cell in &analysis.matrix.cells[row_index] {
            print!("  {:>7.1}%", cell.score * 100.0);
        }
        println!();
    }

    if !analysis.matrix.top_pairs.is_empty() {
        println!("\nTop Pairs:");
        for (rank, pair) in analysis.matrix.top_pairs.iter().enumerate() {
            println!(
                "  {}. {} ∩ {}: {:.1}% ({} shared)",
                rank + 1,
                pair.ids[0],
                pair.ids[1],
                pair.score * 100.0,
                pair.size
            );
        }
    }

    println!(
        "\n{}: {} tracks",
        analysis.common_to_all.label, analysis.common_to_all.size
    );
    let sets = result.playlist_sets();
    let common = selection_tracks(result, &sets, &analysis.common_to_all.playlist_ids);
    for track in common.iter().take(MAX_LISTED_TRACKS) {
        println!("  {} — {}", track.artist_line(), track.title);
    }
    if common.len() > MAX_LISTED_TRACKS {
        println!("  ... and {} more", common.len() - MAX_LISTED_TRACKS);
    }

    let subset_label: Vec<String> = subset.iter().map(ToString::to_string).collect();
    println!("\nRegions over [{}]:", subset_label.join(", "));
    for region in subset_regions {
        let names: Vec<String> = region.sets.iter().map(ToString::to_string).collect();
        println!("  {}: {}", names.join(" ∩ "), region.size);
    }

    println!("\nSuggested subsets:");
    print_suggestion("most similar", &analysis.suggestions.most_similar);
    print_suggestion("first", &analysis.suggestions.first);
    print_suggestion("top by size", &analysis.suggestions.top_by_size);
}

fn print_suggestion(name: &str, ids: &[PlaylistId]) {
    if ids.is_empty() {
        println!("  {name}: (none)");
    } else {
        let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
        println!("  {name}: {}", ids.join(", "));
    }
}

fn print_json(
    result: &ComparisonResult,
    analysis: &OverlapAnalysis,
    subset: &[PlaylistId],
    subset_regions: &[Region],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "playlists": result.playlists,
        "track_keys_by_playlist": result.track_keys_by_playlist,
        "tracks_index": result.tracks_index,
        "analysis": analysis,
        "subset": subset,
        "subset_regions": subset_regions,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(analysis: &OverlapAnalysis) {
    println!("playlist_a\tplaylist_b\tscore\tshared");
    for pair in &analysis.matrix.top_pairs {
        println!(
            "{}\t{}\t{:.4}\t{}",
            pair.ids[0], pair.ids[1], pair.score, pair.size
        );
    }
}
