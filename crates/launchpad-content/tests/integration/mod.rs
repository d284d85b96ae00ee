mod documents;
mod properties;
mod proptests;
