/*! # `imagecat`

A client for an image-metadata catalog.

## Purpose

Search a catalog of images by tags (plus minimum size, license and
language), browse the previews, and open one image's full record: titles,
alt-texts, captions, copyright, license, tags, authors and supported
languages.

The catalog itself is someone else's problem. We talk to it over HTTP (see
[`transport`]), and we hand everything we show to a [`view::Render`]
implementation, which might be a web page, a terminal, or a test.

## Layout

- [`models`]: the catalog's contract (requests, responses, records).
- [`search`]: turns search inputs into a canonical query.
- [`view`]: maps responses into what gets shown.
- [`controller`]: owns the view state and runs search, select, and
  tag-select.

## Status

- [x] Search by tags, minimum size, license, language
- [x] Previews and full records
- [x] Tag click-through
- [x] Stale responses are dropped
- [ ] Paging
*/

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod search;
pub mod transport;
pub mod view;
