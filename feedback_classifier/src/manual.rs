/*!

This is the long-form manual for `feedback_classifier` and `survey-digest`.

## Input formats

The following providers are supported:
* `csv` Comma Separated Values, with the question texts in the first row
* `xlsx` Excel workbooks, as exported by Google Forms or Microsoft Forms

### `csv`

The first row is the header. Leading and trailing spaces in the header are
ignored. Rows may have fewer cells than the header, the missing cells are
treated as empty.

### `xlsx`

The worksheet is selected with `excelWorksheetName`. If it is not provided,
the workbook must contain exactly one worksheet. Dates (such as the
`Timestamp` column of Google Forms) are written out as
`YYYY-MM-DD HH:MM:SS`.

## Columns

Columns are found by substring: the first column whose header contains the
configured text is used. All the columns below are required, a missing one
stops the processing with the list of available headers.

| key | default text |
|---|---|
| `country` | What country are you based in |
| `communicationPreference` | What is your preferred way to receive updates |
| `circleRating` | How would you rate you experience of Circle |
| `circleFeedback` | Please share your reasoning behind your rating for Circle |
| `goals` | What are the top 1-3 things you hope to gain |
| `events` | To help us plan, what types of events |
| `content` | What kind of content / articles / resources |
| `interestGroups` | If we were to create interest-based groups |
| `contribution` | How would you be interested in contributing |
| `involvement` | Would you like us to inform you with specific ways |
| `suggestions` | Do you have any other comments, questions or suggestion |

The value columns (`valueColumns`) are optional and matched on the full
header. The report uses the text between brackets as the name.

## Profiles

* `baseline` Raw country answers (ten most frequent), ratings as written,
  single-keyword sentiment.
* `city` Responses deduplicated by e-mail address (latest `Timestamp` wins),
  countries resolved with the location resolver and unresolved ones reported
  as `Unknown`, ratings formatted with one decimal, sentiment with negation
  phrases. The report can also be written as a JavaScript file.

## Location resolution

The country answer is normalized (lowercase, no accents, no digits or emoji)
and then tried against, in order:
1. blacklisted answers and e-mail/URL fragments, which are rejected,
2. the last comma-separated part only, for `City, Country` answers,
3. the city table,
4. the alias and typo table (`uae`, `uk`, `kennya`, ...),
5. the word `nigeria` (so that it never resolves to Niger),
6. country names as whole words, the longest names first,
7. close spellings of a country name (similarity of 0.8 or more),
8. city names appearing anywhere in the answer.

Anything else is `Unknown`.

## Topics

Each free-text question has five topics and a final `Other`. The topics are
tried in the order of the tables in [`crate::topics`]. A response is placed in
the first topic with a matching keyword, and only there. Blank responses are
not counted at all.

## Sentiment

Each keyword counts once. Negative phrases (`not good`, `too slow`, ...) add
to the negative count. When both counts are non-zero, the larger one wins and
a tie is neutral. Requests (`improve`, `would like`, ...) are always neutral.

*/
