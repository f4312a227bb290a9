/*!
Rule-based classification of community survey responses.

The crate turns noisy survey answers into report-ready values:
- [`location::LocationResolver`] maps free-text locations (`"Lagos, Nigeria"`,
  `"UAE"`, `"Keny"`) to a canonical country name, or to "Unknown".
- [`sentiment::SentimentScorer`] labels a response positive, negative or
  neutral by counting keywords and negative phrases.
- [`topics::categorize`] sorts the responses to a question into a fixed set of
  topic buckets, first matching rule wins.

Everything here is pure and total: no input makes these functions fail. Only
the construction of the resolver and the scorer returns a `Result`.

```
use feedback_classifier::location::LocationResolver;
use feedback_classifier::LocationTables;

let resolver = LocationResolver::new(&LocationTables::STANDARD)?;
assert_eq!(resolver.resolve("Cape Town, South Africa").name_or_unknown(), "South Africa");
assert_eq!(resolver.resolve("jobs@gmail.com").name_or_unknown(), "Unknown");
# Ok::<(), feedback_classifier::ClassifierErrors>(())
```
*/

mod config;
pub mod builder;
pub mod countries;
pub mod location;
pub mod manual;
pub mod normalize;
pub mod sentiment;
pub mod topics;

pub use crate::config::*;
