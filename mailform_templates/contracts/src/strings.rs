use mailform_models::language::Language;
use serde::Serialize;

/// Texts shown to visitors in one language.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Strings {
    pub title: &'static str,

    pub label_from: &'static str,
    pub label_email: &'static str,
    pub label_subject: &'static str,
    pub label_message: &'static str,
    pub label_send: &'static str,
    pub label_preview: &'static str,

    pub placeholder_from: &'static str,
    pub placeholder_email: &'static str,
    pub placeholder_subject: &'static str,
    pub placeholder_message: &'static str,

    pub default_from: &'static str,
    pub default_subject: &'static str,
    pub greeting: &'static str,

    pub validation_failure: &'static str,
    pub checksum_failure: &'static str,
    pub submission_failure: &'static str,
    pub submission_success: &'static str,
    pub invalid_email: &'static str,
    pub empty_message: &'static str,
    pub notice_interim: &'static str,
}

impl Strings {
    pub fn of(language: Language) -> &'static Self {
        match language {
            Language::En => &EN,
            Language::De => &DE,
        }
    }
}

static EN: Strings = Strings {
    title: "Contact",

    label_from: "From",
    label_email: "Email",
    label_subject: "Subject",
    label_message: "Message",
    label_send: "Send Message",
    label_preview: "Preview Message",

    placeholder_from: "Your Name",
    placeholder_email: "you@yourdomain.com",
    placeholder_subject: "Comment",
    placeholder_message: "Enter your message here",

    default_from: "Anonymous",
    default_subject: "Comment",
    greeting: "To send email to the owner of this website, please fill in the form below. \
               Please remember to include a valid email address so that we can reply to you.",

    validation_failure: "Your message could not be sent, because there was a problem with the \
                         information that you entered. Please make sure that you have entered a \
                         valid email address, your name, and the text of your message.",
    checksum_failure: "Your message could not be sent, because it appears that you are trying to \
                       use an automated process to send mail. This form only accepts mail from \
                       human senders.",
    submission_failure: "Your message could not be sent because an error occurred. Please try \
                         again later, or use an alternative way to contact us.",
    submission_success: "Your message has been sent successfully. Thank you.",
    invalid_email: "You did not enter a valid email address. Please use your browser's Back \
                    button to go back and try again.",
    empty_message: "You did not enter a message. Please use your browser's Back button to go \
                    back and try again.",
    notice_interim: "Your message has not been sent yet. This is the message that will be sent. \
                     If everything looks OK, please click the Send button. Otherwise, use your \
                     browser's Back button to go back and edit your message.",
};

static DE: Strings = Strings {
    title: "Kontakt",

    label_from: "Von",
    label_email: "E-Mail",
    label_subject: "Betreff",
    label_message: "Nachricht",
    label_send: "Nachricht senden",
    label_preview: "Vorschau anzeigen",

    placeholder_from: "Ihr Name",
    placeholder_email: "sie@ihredomain.de",
    placeholder_subject: "Kommentar",
    placeholder_message: "Geben Sie hier Ihre Nachricht ein",

    default_from: "Anonym",
    default_subject: "Kommentar",
    greeting: "Um dem Betreiber dieser Website eine E-Mail zu senden, füllen Sie bitte das \
               folgende Formular aus. Bitte geben Sie eine gültige E-Mail-Adresse an, damit wir \
               Ihnen antworten können.",

    validation_failure: "Ihre Nachricht konnte nicht gesendet werden, da es ein Problem mit Ihren \
                         Angaben gab. Bitte stellen Sie sicher, dass Sie eine gültige \
                         E-Mail-Adresse, Ihren Namen und den Text Ihrer Nachricht eingegeben \
                         haben.",
    checksum_failure: "Ihre Nachricht konnte nicht gesendet werden, da es scheint, dass Sie einen \
                       automatisierten Vorgang zum Versenden von E-Mails verwenden. Dieses \
                       Formular nimmt nur Nachrichten von menschlichen Absendern an.",
    submission_failure: "Ihre Nachricht konnte wegen eines Fehlers nicht gesendet werden. Bitte \
                         versuchen Sie es später erneut oder nutzen Sie einen anderen Weg, um uns \
                         zu kontaktieren.",
    submission_success: "Ihre Nachricht wurde erfolgreich gesendet. Vielen Dank.",
    invalid_email: "Sie haben keine gültige E-Mail-Adresse eingegeben. Bitte gehen Sie mit der \
                    Zurück-Schaltfläche Ihres Browsers zurück und versuchen Sie es erneut.",
    empty_message: "Sie haben keine Nachricht eingegeben. Bitte gehen Sie mit der \
                    Zurück-Schaltfläche Ihres Browsers zurück und versuchen Sie es erneut.",
    notice_interim: "Ihre Nachricht wurde noch nicht gesendet. Dies ist die Nachricht, die \
                     gesendet wird. Wenn alles in Ordnung ist, klicken Sie bitte auf Senden. \
                     Andernfalls gehen Sie mit der Zurück-Schaltfläche Ihres Browsers zurück und \
                     bearbeiten Sie Ihre Nachricht.",
};
