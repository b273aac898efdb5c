//! Interactive prompts using dialoguer.
//!
//! Each question is re-asked until the answer is blank (skip) or valid.
//! The model is only asked for once a make has been given.

use anyhow::Result;
use dialoguer::Input;

use crate::pipeline::{
    validate_cylinders, validate_result_limit, validate_year, FilterCriteria, QueryConfig,
    SortField,
};

/// Ask for every filter, starting from the values in `initial`
pub fn prompt_criteria(initial: &FilterCriteria, config: &QueryConfig) -> Result<FilterCriteria> {
    let make = ask_text("Enter the car maker (press Enter to skip)", &initial.make)?;

    let model = if make.is_empty() {
        String::new()
    } else {
        ask_text("Enter the model (press Enter to skip)", &initial.model)?
    };

    let year = ask_validated(
        "Enter the year (press Enter to skip)",
        &number_text(initial.year),
        |s| parse_year_answer(s, config),
    )?;

    let cylinders = ask_validated(
        "Enter the number of cylinders (press Enter to skip)",
        &number_text(initial.cylinders),
        |s| parse_cylinders_answer(s, config),
    )?;

    let result_limit = ask_validated(
        "Enter the maximum number of results you want (press Enter to skip)",
        &number_text(initial.result_limit),
        |s| parse_limit_answer(s, config),
    )?;

    let sort_field = ask_validated(
        "Do you want to sort the results? (Sort by: make, model, year, cylinders) (press Enter to skip)",
        initial.sort_field.map(|s| s.as_str()).unwrap_or(""),
        parse_sort_answer,
    )?;

    Ok(FilterCriteria {
        make,
        model,
        sort_field,
        year,
        cylinders,
        result_limit,
    })
}

/// Parse a year answer; blank means unset
pub fn parse_year_answer(input: &str, config: &QueryConfig) -> Result<u32, String> {
    let year = parse_number_answer(input)?;
    validate_year(year, config).map_err(|_| {
        format!(
            "Please select a year between {} and {}.",
            config.year_range.start(),
            config.year_range.end()
        )
    })?;
    Ok(year)
}

/// Parse a cylinder count answer; blank means unset
pub fn parse_cylinders_answer(input: &str, config: &QueryConfig) -> Result<u32, String> {
    let cylinders = parse_number_answer(input)?;
    validate_cylinders(cylinders, config).map_err(|_| "Invalid option.".to_string())?;
    Ok(cylinders)
}

/// Parse a result count answer; blank means the default
pub fn parse_limit_answer(input: &str, config: &QueryConfig) -> Result<u32, String> {
    let limit = parse_number_answer(input)?;
    validate_result_limit(limit, config).map_err(|_| "Invalid option.".to_string())?;
    Ok(limit)
}

/// Parse a sort field answer; blank means API order
pub fn parse_sort_answer(input: &str) -> Result<Option<SortField>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse::<SortField>()
        .map(Some)
        .map_err(|_| "Invalid option.".to_string())
}

fn parse_number_answer(input: &str) -> Result<u32, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }
    input
        .parse()
        .map_err(|_| "Please enter a whole number.".to_string())
}

fn number_text(value: u32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

fn ask_text(prompt: &str, initial: &str) -> Result<String> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer.trim().to_string())
}

fn ask_validated<T, F>(prompt: &str, initial: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T, String>,
{
    let answer: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .validate_with(|input: &String| parse(input.as_str()).map(|_| ()))
        .interact_text()?;
    parse(answer.as_str()).map_err(anyhow::Error::msg)
}
