//! Response composition.
//!
//! Two rendering modes share this module:
//!
//! - **Template mode**: fixed string templates rendered directly to the
//!   user. Used by the rule-based understanding path.
//! - **Prompt mode**: natural-language instructions describing what the
//!   backend actions produced, handed to the text generator for final
//!   wording. Used by the model-assisted path.
//!
//! Both modes cap recommendation lists at [`MAX_RECOMMENDATIONS`] entries
//! and watched-list summaries at [`MAX_LIST_ENTRIES`], appending an exact
//! remainder count when the watched list is truncated. An empty
//! recommendation list omits its section entirely.

use crate::movie::MovieRecord;

/// Recommendations shown per reply, even when more are available.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Watched-list entries summarized per reply.
pub const MAX_LIST_ENTRIES: usize = 10;

/// Render a movie's vote average the way the provider reports it: one
/// decimal place, never recomputed.
fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// The core movie info block.
///
/// The year is the first four characters of the release date and renders
/// blank when absent.
pub fn format_movie_info(movie: &MovieRecord) -> String {
    let year = movie.release_year().unwrap_or("");
    let overview = if movie.overview.is_empty() {
        "No overview available"
    } else {
        &movie.overview
    };
    format!(
        "Title: {} ({})\nScore: {}/10\nOverview: {}\n",
        movie.title,
        year,
        format_score(movie.vote_average),
        overview
    )
}

fn numbered_titles(movies: &[MovieRecord]) -> String {
    movies
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .enumerate()
        .map(|(i, m)| format!("{}. {} ({}/10)\n", i + 1, m.title, format_score(m.vote_average)))
        .collect()
}

// ---------------------------------------------------------------------------
// Template mode
// ---------------------------------------------------------------------------

/// get_info success: movie details plus up to three similar titles.
pub fn info_response(movie: &MovieRecord, similar: &[MovieRecord]) -> String {
    let mut response = format_movie_info(movie);
    if !similar.is_empty() {
        response.push_str("\n\nYou might also like:\n");
        response.push_str(&numbered_titles(similar));
    }
    response
}

/// mark_watched success: confirmation plus up to three unwatched
/// recommendations.
pub fn watched_response(movie: &MovieRecord, recommendations: &[MovieRecord]) -> String {
    let mut response = format!("Great! I've marked {} as watched.", movie.title);
    if !recommendations.is_empty() {
        response.push_str("\n\nBased on this, you might enjoy:\n");
        response.push_str(&numbered_titles(recommendations));
    }
    response
}

pub fn already_watched_response(title: &str) -> String {
    format!("You've already marked {} as watched!", title)
}

pub fn info_not_found_response(entity: &str) -> String {
    format!("Sorry, I couldn't find information about '{}'", entity)
}

pub fn watch_not_found_response(entity: &str) -> String {
    format!("Sorry, I couldn't find the movie '{}'", entity)
}

pub fn store_error_response() -> String {
    "Sorry, there was an error marking the movie as watched".to_string()
}

pub fn provider_error_response() -> String {
    "Sorry, I'm having trouble reaching the movie database right now. Please try again later"
        .to_string()
}

/// list_watched success: count plus up to ten summaries, with an exact
/// remainder count when truncated.
pub fn watched_list_response(total: usize, details: &[MovieRecord]) -> String {
    let noun = if total == 1 { "movie" } else { "movies" };
    let mut response = format!("You've watched {} {}:\n", total, noun);
    for (i, movie) in details.iter().take(MAX_LIST_ENTRIES).enumerate() {
        response.push_str(&format!(
            "{}. {} ({}/10)\n",
            i + 1,
            movie.title,
            format_score(movie.vote_average)
        ));
    }
    if total > MAX_LIST_ENTRIES {
        response.push_str(&format!("...and {} more", total - MAX_LIST_ENTRIES));
    }
    response
}

pub fn empty_watched_list_response() -> String {
    "You haven't marked any movies as watched yet. Tell me about one you've seen!".to_string()
}

pub fn list_error_response() -> String {
    "Sorry, I couldn't look up your watched movies right now. Please try again later".to_string()
}

pub fn missing_entity_response() -> String {
    "Sorry, I couldn't understand which movie you're talking about. \
     Try saying 'Tell me about [movie name]' or 'I watched [movie name]'"
        .to_string()
}

pub fn unknown_response() -> String {
    "Sorry, I don't understand that command. \
     Try asking about a movie or marking one as watched!"
        .to_string()
}

pub fn help_response() -> String {
    "Here's what I can do:\n\
     - 'Tell me about [movie]' - movie details and a score\n\
     - 'I watched [movie]' - mark a movie as watched\n\
     - 'Which movies have I watched' - your watched list\n\
     - 'help' - this message"
        .to_string()
}

// ---------------------------------------------------------------------------
// Prompt mode
// ---------------------------------------------------------------------------

/// Prompt for a successful movie lookup.
pub fn info_prompt(movie: &MovieRecord, similar: &[MovieRecord]) -> String {
    let mut prompt = format!(
        "The user asked about a movie. It was found:\n{}",
        format_movie_info(movie)
    );
    if similar.is_empty() {
        prompt.push_str("\nNo similar movies scored high enough to recommend.");
    } else {
        prompt.push_str("\nSimilar movies worth recommending, in order:\n");
        prompt.push_str(&numbered_titles(similar));
    }
    prompt.push_str("\nShare the details and recommendations with the user.");
    prompt
}

/// Prompt for a lookup that found nothing.
pub fn not_found_prompt(entity: &str) -> String {
    format!(
        "No movie matching '{}' was found. \
         Apologize briefly and suggest the user check the title.",
        entity
    )
}

/// Prompt for a movie newly marked as watched.
pub fn watched_prompt(movie: &MovieRecord, recommendations: &[MovieRecord]) -> String {
    let mut prompt = format!("'{}' was just marked as watched for the user.", movie.title);
    if recommendations.is_empty() {
        prompt.push_str(" There are no unwatched recommendations to offer.");
    } else {
        prompt.push_str(&format!(
            "\nBased on it, {} unwatched recommendations, in order:\n{}",
            recommendations.len().min(MAX_RECOMMENDATIONS),
            numbered_titles(recommendations)
        ));
    }
    prompt.push_str("\nConfirm the action and mention the recommendations, if any.");
    prompt
}

/// Prompt for a movie that was already on the watched list.
pub fn already_watched_prompt(title: &str) -> String {
    format!(
        "The user asked to mark '{}' as watched, but it is already on their \
         watched list. Let them know, lightly.",
        title
    )
}

/// Prompt summarizing the watched list.
pub fn watched_list_prompt(total: usize, details: &[MovieRecord]) -> String {
    if total == 0 {
        return "The user's watched list is empty. Invite them to tell you about \
                a movie they've seen."
            .to_string();
    }
    let mut prompt = format!("The user has watched {} movies. ", total);
    prompt.push_str("The first entries, in order:\n");
    for (i, movie) in details.iter().take(MAX_LIST_ENTRIES).enumerate() {
        prompt.push_str(&format!(
            "{}. {} ({}/10)\n",
            i + 1,
            movie.title,
            format_score(movie.vote_average)
        ));
    }
    if total > MAX_LIST_ENTRIES {
        prompt.push_str(&format!("and {} more beyond these.\n", total - MAX_LIST_ENTRIES));
    }
    prompt.push_str("Summarize their watched list.");
    prompt
}

/// Prompt for a help request.
pub fn help_prompt() -> String {
    "The user asked what you can do. Explain briefly: ask about a movie for \
     details and a score, say they watched one to track it, ask which movies \
     they have watched for their list."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> MovieRecord {
        MovieRecord {
            id: 27205,
            title: "Inception".to_string(),
            vote_average: 8.8,
            release_date: "2010-07-16".to_string(),
            overview: "A thief who steals corporate secrets...".to_string(),
            popularity: 30.0,
        }
    }

    fn similar(id: u64, title: &str, score: f64) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            vote_average: score,
            release_date: String::new(),
            overview: String::new(),
            popularity: 10.0,
        }
    }

    #[test]
    fn test_movie_info_block() {
        let text = format_movie_info(&inception());
        assert!(text.contains("Title: Inception (2010)"));
        assert!(text.contains("Score: 8.8/10"));
        assert!(text.contains("Overview: A thief"));
    }

    #[test]
    fn test_whole_score_keeps_one_decimal() {
        let mut movie = inception();
        movie.vote_average = 7.0;
        assert!(format_movie_info(&movie).contains("Score: 7.0/10"));
    }

    #[test]
    fn test_missing_year_renders_blank() {
        let mut movie = inception();
        movie.release_date.clear();
        assert!(format_movie_info(&movie).contains("Title: Inception ()"));
    }

    #[test]
    fn test_empty_overview_gets_placeholder() {
        let mut movie = inception();
        movie.overview.clear();
        assert!(format_movie_info(&movie).contains("No overview available"));
    }

    #[test]
    fn test_info_response_lists_two_similar() {
        let text = info_response(
            &inception(),
            &[similar(1, "Interstellar", 8.4), similar(2, "Memento", 8.2)],
        );
        assert!(text.contains("You might also like:"));
        assert!(text.contains("1. Interstellar (8.4/10)"));
        assert!(text.contains("2. Memento (8.2/10)"));
        assert!(!text.contains("3."));
    }

    #[test]
    fn test_info_response_caps_at_three() {
        let many: Vec<MovieRecord> = (1..=5)
            .map(|i| similar(i, &format!("Movie {}", i), 8.0))
            .collect();
        let text = info_response(&inception(), &many);
        assert!(text.contains("3. Movie 3"));
        assert!(!text.contains("4. Movie 4"));
    }

    #[test]
    fn test_info_response_omits_empty_recommendations() {
        let text = info_response(&inception(), &[]);
        assert!(!text.contains("You might also like"));
    }

    #[test]
    fn test_watched_response_mentions_title() {
        let text = watched_response(&inception(), &[similar(1, "Tenet", 7.6)]);
        assert!(text.starts_with("Great! I've marked Inception as watched."));
        assert!(text.contains("Based on this, you might enjoy:"));
        assert!(text.contains("1. Tenet (7.6/10)"));
    }

    #[test]
    fn test_already_watched_wording() {
        assert_eq!(
            already_watched_response("Inception"),
            "You've already marked Inception as watched!"
        );
    }

    #[test]
    fn test_watched_list_truncation_remainder() {
        let details: Vec<MovieRecord> = (1..=10)
            .map(|i| similar(i, &format!("Movie {}", i), 7.0))
            .collect();
        let text = watched_list_response(14, &details);
        assert!(text.contains("You've watched 14 movies:"));
        assert!(text.contains("10. Movie 10"));
        assert!(text.contains("...and 4 more"));
    }

    #[test]
    fn test_watched_list_no_remainder_when_short() {
        let details = vec![similar(1, "Heat", 8.3)];
        let text = watched_list_response(1, &details);
        assert!(text.contains("You've watched 1 movie:"));
        assert!(!text.contains("more"));
    }

    #[test]
    fn test_info_prompt_encodes_absence_of_recommendations() {
        let prompt = info_prompt(&inception(), &[]);
        assert!(prompt.contains("No similar movies"));
    }

    #[test]
    fn test_watched_list_prompt_counts_remainder() {
        let details: Vec<MovieRecord> = (1..=10)
            .map(|i| similar(i, &format!("Movie {}", i), 7.0))
            .collect();
        let prompt = watched_list_prompt(12, &details);
        assert!(prompt.contains("watched 12 movies"));
        assert!(prompt.contains("and 2 more beyond these"));
    }
}
