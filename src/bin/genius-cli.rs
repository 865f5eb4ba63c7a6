use clap::{Parser, Subcommand, ValueEnum};
use genius::{GeniusApi, SongSort, TextFormat, WebPageLookup};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "genius-cli")]
#[command(about = "CLI for the Genius API", long_about = None)]
struct Cli {
    /// Genius access token (can also be set via GENIUS_ACCESS_TOKEN env var)
    #[arg(long, env = "GENIUS_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    /// Print the decoded response as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Format {
    Dom,
    Plain,
    Html,
}

impl From<Format> for TextFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Dom => TextFormat::Dom,
            Format::Plain => TextFormat::Plain,
            Format::Html => TextFormat::Html,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Sort {
    Title,
    Popularity,
}

impl From<Sort> for SongSort {
    fn from(s: Sort) -> Self {
        match s {
            Sort::Title => SongSort::Title,
            Sort::Popularity => SongSort::Popularity,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the account owning the token
    Account,
    /// Show an artist
    Artist {
        id: u64,

        #[arg(short, long, value_enum, default_value_t = Format::Plain)]
        format: Format,
    },
    /// List an artist's songs
    ArtistSongs {
        id: u64,

        #[arg(short, long, value_enum, default_value_t = Sort::Title)]
        sort: Sort,

        #[arg(long, default_value_t = 20)]
        per_page: u32,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show a song
    Song {
        id: u64,

        #[arg(short, long, value_enum, default_value_t = Format::Plain)]
        format: Format,
    },
    /// Show an annotation
    Annotation {
        id: u64,

        #[arg(short, long, value_enum, default_value_t = Format::Plain)]
        format: Format,
    },
    /// Search for songs
    Search {
        /// Search query
        query: String,
    },
    /// Look up an annotated web page by URL
    WebPage { url: String },
}

/// 1-based position of the `index`-th song of `page` across all pages.
fn song_number(page: u32, per_page: u32, index: usize) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(per_page) + index as u64 + 1
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = GeniusApi::new(cli.token);

    match cli.command {
        Commands::Account => {
            let user = api.get_account().await?;
            if cli.json {
                return print_json(&user);
            }
            println!("{} (@{}, ID: {})", user.display_name(), user.login, user.id);
            println!("   IQ: {}", user.iq.unwrap_or(0));
            println!("   Unread: {}", user.unread_total());
            if let Some(image) = user.avatar.as_ref().and_then(|a| a.largest()) {
                println!("   Avatar: {}", image.url);
            }
        }
        Commands::Artist { id, format } => {
            let artist = api.get_artist_with_format(id, format.into()).await?;
            if cli.json {
                return print_json(&artist);
            }
            println!("{} (ID: {})", artist.name, artist.id);
            println!("   {}", artist.url);
            for (network, handle) in artist.social_handles() {
                println!("   {}: {}", network, handle);
            }
            if let Some(description) = artist.description_text() {
                println!();
                println!("{}", description);
            }
        }
        Commands::ArtistSongs {
            id,
            sort,
            per_page,
            page,
        } => {
            let songs_page = api
                .get_artist_songs_page(id, sort.into(), per_page, page)
                .await?;
            if cli.json {
                return print_json(&songs_page);
            }
            for (i, song) in songs_page.songs.iter().enumerate() {
                println!(
                    "{}. {} (ID: {})",
                    song_number(page, per_page, i),
                    song.full_title,
                    song.id
                );
            }
            if let Some(next) = songs_page.next_page {
                println!("Next page: {}", next);
            }
        }
        Commands::Song { id, format } => {
            let song = api.get_song(id, format.into()).await?;
            if cli.json {
                return print_json(&song);
            }
            println!(
                "{} - {} (ID: {})",
                song.artists_string(", "),
                song.title,
                song.id
            );
            if let Some(album) = &song.album {
                println!("   Album: {}", album.name);
            }
            if let Some(date) = &song.release_date {
                println!("   Released: {}", date);
            }
            if let Some(description) = song.description_text() {
                println!();
                println!("{}", description);
            }
        }
        Commands::Annotation { id, format } => {
            let annotation = api.get_annotation(id, format.into()).await?;
            if cli.json {
                return print_json(&annotation);
            }
            println!(
                "Annotation {} ({}, {} votes)",
                annotation.id, annotation.state, annotation.votes_total
            );
            if let Some(user) = annotation.primary_author().and_then(|a| a.user.as_ref()) {
                println!("   By: {}", user.display_name());
            }
            if let Some(body) = annotation.body_text() {
                println!();
                println!("{}", body);
            }
        }
        Commands::Search { query } => {
            let hits = api.search(&query).await?;
            if cli.json {
                return print_json(&hits);
            }
            println!("Results for '{}':", query);
            for (i, hit) in hits.iter().filter(|h| h.is_song()).enumerate() {
                println!(
                    "{}. {} - {} (ID: {})",
                    i + 1,
                    hit.result.artists_string(", "),
                    hit.result.title,
                    hit.result.id
                );
            }
        }
        Commands::WebPage { url } => {
            let page = api.get_web_page(&WebPageLookup::url(url)).await?;
            if cli.json {
                return print_json(&page);
            }
            println!(
                "{} (ID: {}, {} annotations)",
                page.title.as_deref().unwrap_or(&page.normalized_url),
                page.id,
                page.annotation_count
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_number() {
        assert_eq!(song_number(1, 20, 0), 1);
        assert_eq!(song_number(3, 20, 4), 45);
        assert_eq!(song_number(0, 20, 0), 1);
    }

    #[test]
    fn test_song_number_large_pages() {
        assert_eq!(
            song_number(u32::MAX, u32::MAX, 0),
            u64::from(u32::MAX - 1) * u64::from(u32::MAX) + 1
        );
    }

    #[test]
    fn test_cli_parses_artist_songs() {
        let cli = Cli::try_parse_from([
            "genius-cli",
            "--token",
            "abc",
            "artist-songs",
            "16775",
            "--per-page",
            "5",
            "--page",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.token, "abc");
        match cli.command {
            Commands::ArtistSongs { id, per_page, page, sort } => {
                assert_eq!(id, 16775);
                assert_eq!(per_page, 5);
                assert_eq!(page, 2);
                assert!(sort == Sort::Title);
            }
            _ => panic!("expected artist-songs"),
        }
    }
}
