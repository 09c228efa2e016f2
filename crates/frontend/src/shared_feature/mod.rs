pub mod contributor_profile;
