mod car;
mod user;
