//! Subway map shortest-path server.
//!
//! A web application that turns a subway-map JSON document into a
//! weighted graph and answers: "what is the shortest path between these
//! two stations?"

pub mod distance;
pub mod domain;
pub mod graph;
pub mod mapdata;
pub mod render;
pub mod routing;
pub mod web;
