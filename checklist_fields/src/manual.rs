/*!

This is the long-form manual for `checklist_fields` and `reviewset`.

## The template

The template is the empty review form. Every field line of the template becomes one
column of the dataset, in the order of the template. The lines are read as follows:

* blank lines and lines starting with `[//]:` are instructions, they are ignored
* `- [ ] Name` is a checkbox field called `Name`
* `name:` is a descriptive field called `name`
* other lines (titles, prose) are ignored

A column called `bib-acronym` is always added at the end. It holds the identifier of
the review, taken from its file name: `smith_2020_transformers.md` becomes `smith2020`.

## Generic fields

The literal `OTHER` can appear many times in the template. Each occurrence is given a
unique name:

* after a line mentioning a hypothesis (`H1` to `H99`), it becomes `OTHER_H<n>` for the
  last hypothesis seen
* before any hypothesis, the first four occurrences become, in order, `OTHER_dataset`,
  `OTHER_supervised`, `OTHER_unsupervised` and `OTHER_utilized_model`

The reviews are renamed the same way, so a review must keep the structure of the template.

A `Neural Networks` checkbox following a `supervised` or `unsupervised` checkbox becomes
`Neural Networks (supervised)` or `Neural Networks (unsupervised)`.

## Filling in a review

* tick a checkbox with `- [x] Name`; it gets the value `1` in the dataset
* write descriptive values after the colon: `paper title: Attention is all you need`
* comments can be added after `#` on any field line

A field that is missing from a review is reported in the log and left empty. A field
that appears several times with different content, for instance ticked once and
unticked once, stops the whole run: the review must be corrected first.

*/
