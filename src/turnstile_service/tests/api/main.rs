mod authenticate;
mod customers;
mod helpers;
