mod cookies;
mod routes;
