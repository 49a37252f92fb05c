mod filtering;
mod selection;
