pub mod form;

pub use form::{
    FormField, MultiOptionGrid, OptionGrid, RankedListField, SelectField, SliderField,
    TextAreaField,
};
