//! Reference text for the IFDB search grammar
//!
//! Queries are passed to IFDB verbatim; this is documentation only.

pub const SEARCH_SYNTAX: &str = r#"IFDB search syntax:
+word makes word mandatory - only items that contain this word will be listed.

-word makes word prohibited - only items that don't contain this word will be listed.

"phrase" searches for the exact phrase within the quotes: all of the words have to be matched in the exact order given.

author:name lists games by the named author or authors.

tag:tag name searches for games containing the given tag text.

series:name lists only games with the given series name.

genre:genre name only shows games with the given genre. If a game's listing has multiple genres, it will match as long as genre name is found within the listing. For example, genre:western will match a game listed with genre "Science Fiction/Western/Romance."

rating:low-high lists games with average ratings in the given range (inclusive). For example, rating:2.5-3.5 lists games rated from 2.5 to 3.5 stars. Leave out an endpoint for an open-ended search: rating:3- lists games with ratings 3 stars and above; rating:-2 lists games rated 2 stars and below.

#ratings:low-high lists games with a total number of ratings in the given range. For example, #ratings:3- lists games with three or more ratings.

ratingdev:low-high lists games with a ratings standard deviation in the given range.

#reviews:low-high lists games with a total number of member reviews in the given range. (This doesn't count editorial reviews.)

forgiveness:rating only shows games with the given "forgiveness" rating (on the Zarfian scale: Merciful, Polite, Tough, Nasty, Cruel).

published:year-year only shows games with publication dates in the given range. For example, published:1990-2000 shows games published from 1990 to 2000. published:1990 lists only games published in 1990. published:1990- lists games published in 1990 or later, and published:-2000 lists games published in 2000 or earlier. published:30d- searches for games published within the last 30 days. published:90d-30d searches for games published within the last 90 days, but more than 30 days ago.

added:year-year only shows games with listings added to the database on dates in the given range, with the same forms as published: (for example added:2007-2020, added:2007-, added:30d-).

language:code lists games written in the given spoken language. You can use the English name of the language, or a two- or three-letter ISO-639 code ("en" for English, "fr" for French, etc).

system:name lists only games written with the given authoring system (TADS, Inform, Hugo, etc).

format:name lists only games with downloadable files available for the given format. Use * as a wildcard: format:tads * searches for all TADS versions. Use an operating system name to search for native executables for that system.

downloadable:yes|no lists games that are/are not downloadable. A downloadable game is one that has at least one story file or application download link.

playtime:minimum-maximum lists games with an estimated play time in the given range. After each number, use h for hours or m for minutes. For example, playtime:2h15m-3h. Hours may include decimals (3.5h). playtime:1.5h- lists games of at least 1.5 hours, playtime:-45m lists games of 45 minutes or less. playtime: with no text after it searches for games with no estimated play time.

bafs:id searches for the game with the given Baf's Guide ID.

ifid:xxx searches for a game with the given IFID.

tuid:xxx searches for a game with the given TUID.

authorid:id lists games by the author with the given id.

competitionid:id lists games in a competition with the given id."#;
