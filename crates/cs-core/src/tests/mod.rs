mod credential;
mod models;
