mod common;
mod profile;
mod rules;
