//! Bike-share destination recommender.
//!
//! A web service that answers: "I'm at this station and want a ride of
//! between X and Y minutes, where should I go?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod estimate;
pub mod recommend;
pub mod store;
pub mod web;
