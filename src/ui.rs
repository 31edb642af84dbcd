// UI layer: implements the interactive menu loop using `dialoguer`.
// The functions are small and synchronous to make the flow easy to follow.
// Every menu branch re-fetches the breed catalog; nothing is kept across
// iterations, so the display can never go stale.

use crate::api::{ApiClient, BreedCatalog};
use anyhow::Result;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::time::Duration;

/// Main interactive menu. Receives an `ApiClient` instance and runs a
/// prompt loop until the user chooses option 4 (Exit).
///
/// Choices are entered as text and validated here; a non-numeric or
/// out-of-range entry prints an error and re-prompts. API failures are
/// reported and recovered in-loop; nothing short of Exit ends the loop.
pub fn main_menu(api: ApiClient) -> Result<()> {
    loop {
        print_menu();
        let raw: String = Input::new()
            .with_prompt("Enter your choice (1-4)")
            .allow_empty(true)
            .interact_text()?;
        match parse_choice(&raw) {
            Some(1) => show_breeds(&api),
            Some(2) => breed_image(&api)?,
            Some(3) => sub_breed_image(&api)?,
            Some(4) => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Error: Invalid choice. Please select a number between 1 and 4."),
        }
    }
    Ok(())
}

fn print_menu() {
    println!("\nDog Image Browser");
    println!("\nWhat would you like to do?");
    println!("1. Show all breeds");
    println!("2. Get a random image from a breed");
    println!("3. Get a random image from a sub-breed");
    println!("4. Exit");
}

/// Parse a raw menu entry into a choice in 1..=4. Leading/trailing
/// whitespace is ignored; anything else is rejected.
pub fn parse_choice(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n @ 1..=4) => Some(n),
        _ => None,
    }
}

/// Menu option 1: fetch the catalog and print all breed names.
fn show_breeds(api: &ApiClient) {
    let Some(catalog) = fetch_catalog(api) else { return };
    if catalog.is_empty() {
        println!("Error: No breeds available to display.");
        return;
    }
    println!("\nAvailable breeds:");
    print!("{}", format_breeds(&catalog));
}

/// Render the breed names five per line, comma-separated, each line
/// indented two spaces. The catalog iterates in ascending order already.
pub fn format_breeds(catalog: &BreedCatalog) -> String {
    let breeds: Vec<&str> = catalog.keys().map(String::as_str).collect();
    breeds
        .chunks(5)
        .map(|row| format!("  {}\n", row.join(", ")))
        .collect()
}

/// Menu option 2: prompt for a breed, validate it against a fresh
/// catalog, then fetch and display a random image.
fn breed_image(api: &ApiClient) -> Result<()> {
    let Some(catalog) = fetch_catalog(api) else { return Ok(()) };
    let raw: String = Input::new()
        .with_prompt("Enter the breed name")
        .allow_empty(true)
        .interact_text()?;
    let breed = match clean_breed(&catalog, &raw) {
        Ok(b) => b,
        Err(msg) => {
            println!("{}", msg);
            return Ok(());
        }
    };

    let spinner = spinner("Fetching image...");
    let result = api.random_image(&breed);
    spinner.finish_and_clear();
    match result {
        Ok(url) => println!("Random image of {}: {}", breed, url),
        Err(e) => {
            debug!("image fetch failed: {:#}", e);
            println!("Error: Could not fetch image from API. Please try again.");
        }
    }
    Ok(())
}

/// Menu option 3: prompt for a breed, list its sub-breeds, prompt for a
/// sub-breed, then fetch and display a random image of it.
fn sub_breed_image(api: &ApiClient) -> Result<()> {
    let Some(catalog) = fetch_catalog(api) else { return Ok(()) };
    let raw: String = Input::new()
        .with_prompt("Enter the breed name")
        .allow_empty(true)
        .interact_text()?;
    let breed = match clean_breed(&catalog, &raw) {
        Ok(b) => b,
        Err(msg) => {
            println!("{}", msg);
            return Ok(());
        }
    };

    let sub_breeds = &catalog[&breed];
    if sub_breeds.is_empty() {
        println!("Error: Breed '{}' has no sub-breeds.", breed);
        return Ok(());
    }
    println!("Available sub-breeds for '{}': {}", breed, sub_breeds.join(", "));

    let raw: String = Input::new()
        .with_prompt("Enter the sub-breed name")
        .allow_empty(true)
        .interact_text()?;
    let sub_breed = match clean_sub_breed(sub_breeds, &breed, &raw) {
        Ok(s) => s,
        Err(msg) => {
            println!("{}", msg);
            return Ok(());
        }
    };

    let spinner = spinner("Fetching image...");
    let result = api.random_sub_breed_image(&breed, &sub_breed);
    spinner.finish_and_clear();
    match result {
        Ok(url) => println!("Random image of {} from {}: {}", sub_breed, breed, url),
        Err(e) => {
            debug!("sub-breed image fetch failed: {:#}", e);
            println!("Error: Could not fetch image from API. Please try again.");
        }
    }
    Ok(())
}

/// Clean a raw breed entry and check it against the catalog. Returns the
/// trimmed, lowercased name, or the user-facing error message. Runs
/// strictly before any image request for that name.
pub fn clean_breed(catalog: &BreedCatalog, raw: &str) -> std::result::Result<String, String> {
    let breed = raw.trim().to_lowercase();
    if breed.is_empty() {
        return Err("Error: Breed name cannot be empty.".into());
    }
    if !catalog.contains_key(&breed) {
        return Err(format!("Error: Invalid breed '{}'. Please try again.", breed));
    }
    Ok(breed)
}

/// Clean a raw sub-breed entry and check it against the breed's
/// sub-breed list. Same contract as `clean_breed`.
pub fn clean_sub_breed(
    sub_breeds: &[String],
    breed: &str,
    raw: &str,
) -> std::result::Result<String, String> {
    let sub_breed = raw.trim().to_lowercase();
    if sub_breed.is_empty() {
        return Err("Error: Sub-breed name cannot be empty.".into());
    }
    if !sub_breeds.iter().any(|s| s == &sub_breed) {
        return Err(format!(
            "Error: Invalid sub-breed '{}' for breed '{}'.",
            sub_breed, breed
        ));
    }
    Ok(sub_breed)
}

/// Fetch a fresh catalog for the current menu branch. On failure the
/// single user-facing error line is printed here and `None` is returned
/// so the branch re-prompts; an `Ok` but empty catalog passes through
/// for the caller to report.
fn fetch_catalog(api: &ApiClient) -> Option<BreedCatalog> {
    let spinner = spinner("Fetching breed list...");
    let result = api.list_all_breeds();
    spinner.finish_and_clear();
    match result {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            debug!("breed list fetch failed: {:#}", e);
            println!("Error: Could not fetch breed list from API. Please try again.");
            None
        }
    }
}

/// indicatif spinner shown while an API call is in flight; cleared
/// before any result or error prints.
fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb.set_message(msg.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(entries: &[(&str, &[&str])]) -> BreedCatalog {
        entries
            .iter()
            .map(|(breed, subs)| {
                (
                    breed.to_string(),
                    subs.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn parse_choice_accepts_menu_range() {
        assert_eq!(parse_choice("1"), Some(1));
        assert_eq!(parse_choice("4"), Some(4));
        assert_eq!(parse_choice(" 2 "), Some(2));
    }

    #[test]
    fn parse_choice_rejects_everything_else() {
        assert_eq!(parse_choice("abc"), None);
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("0"), None);
        assert_eq!(parse_choice("5"), None);
        assert_eq!(parse_choice("-1"), None);
        assert_eq!(parse_choice("1.5"), None);
    }

    #[test]
    fn format_breeds_renders_five_per_line_sorted() {
        let catalog = catalog(&[
            ("terrier", &[]),
            ("akita", &[]),
            ("beagle", &[]),
            ("pug", &[]),
            ("hound", &["afghan"]),
            ("corgi", &["cardigan"]),
            ("boxer", &[]),
        ]);
        let rendered = format_breeds(&catalog);
        assert_eq!(
            rendered,
            "  akita, beagle, boxer, corgi, hound\n  pug, terrier\n"
        );
    }

    #[test]
    fn format_breeds_lists_each_breed_exactly_once() {
        let catalog = catalog(&[("hound", &["afghan", "basset"]), ("pug", &[])]);
        let rendered = format_breeds(&catalog);
        assert_eq!(rendered.matches("hound").count(), 1);
        assert_eq!(rendered.matches("pug").count(), 1);
        // Sub-breeds never appear in the breed listing.
        assert!(!rendered.contains("afghan"));
    }

    #[test]
    fn clean_breed_normalizes_and_accepts_known_breed() {
        let catalog = catalog(&[("hound", &["afghan", "basset"])]);
        assert_eq!(clean_breed(&catalog, "  HOUND "), Ok("hound".to_string()));
    }

    #[test]
    fn clean_breed_rejects_empty_input() {
        let catalog = catalog(&[("hound", &[])]);
        let err = clean_breed(&catalog, "   ").unwrap_err();
        assert_eq!(err, "Error: Breed name cannot be empty.");
    }

    #[test]
    fn clean_breed_rejects_unknown_breed_by_name() {
        let catalog = catalog(&[("hound", &[])]);
        let err = clean_breed(&catalog, "dragon").unwrap_err();
        assert_eq!(err, "Error: Invalid breed 'dragon'. Please try again.");
    }

    #[test]
    fn clean_sub_breed_accepts_member_of_list() {
        let subs = vec!["afghan".to_string(), "basset".to_string()];
        assert_eq!(
            clean_sub_breed(&subs, "hound", " Basset "),
            Ok("basset".to_string())
        );
    }

    #[test]
    fn clean_sub_breed_rejects_empty_and_unknown() {
        let subs = vec!["afghan".to_string(), "basset".to_string()];
        assert_eq!(
            clean_sub_breed(&subs, "hound", "").unwrap_err(),
            "Error: Sub-breed name cannot be empty."
        );
        assert_eq!(
            clean_sub_breed(&subs, "hound", "corgi").unwrap_err(),
            "Error: Invalid sub-breed 'corgi' for breed 'hound'."
        );
    }
}
